use crate::common::*;

#[doc = r#"
    차트 하나를 적재하면서 집계된 데이터 품질 지표

    # Fields
    * `total_rows` - 헤더 이후의 데이터 행 수 (빈 줄 제외)
    * `kept_rows` - 시계열에 포함된 행 수
    * `dropped_non_numeric` - 가격이 숫자가 아니거나 유한하지 않아 제외된 행 수
    * `dropped_invalid_period` - 기간이 `YYYY-MM` 형식이 아니라 제외된 행 수
    * `malformed_rows` - CSV 리더가 해석하지 못했거나 닫히지 않은 따옴표로 줄이 삼켜진 행 수
    * `duplicate_periods` - 앞선 레코드와 기간이 겹치는 레코드 수 (제외하지 않음)
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct DataQuality {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub dropped_non_numeric: usize,
    pub dropped_invalid_period: usize,
    pub malformed_rows: usize,
    pub duplicate_periods: usize,
}

impl DataQuality {
    pub fn dropped_rows(&self) -> usize {
        self.dropped_non_numeric + self.dropped_invalid_period + self.malformed_rows
    }
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={} kept={} dropped={} (non_numeric={} invalid_period={} malformed={}) \
             duplicate_periods={}",
            self.total_rows,
            self.kept_rows,
            self.dropped_rows(),
            self.dropped_non_numeric,
            self.dropped_invalid_period,
            self.malformed_rows,
            self.duplicate_periods
        )
    }
}
