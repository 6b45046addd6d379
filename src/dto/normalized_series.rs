use crate::common::*;

use crate::model::series::series::*;

#[doc = r#"
    정렬이 끝난 시계열과 렌더러 입력값

    # Fields
    * `series` - 기간 오름차순으로 정렬된 시계열
    * `tick_interval` - X축 라벨 간격. 시계열 길이와 무관하게 8개 안팎의 라벨이 보이도록 `max(1, len / 8)`
    * `max_value` - 최댓값. 빈 시계열이면 `None`
    * `duplicate_periods` - 정렬 후 인접한 동일 기간 레코드 수
"#]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct NormalizedSeries {
    pub series: Series,
    pub tick_interval: usize,
    pub max_value: Option<f64>,
    pub duplicate_periods: usize,
}

impl NormalizedSeries {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn last_period(&self) -> Option<&str> {
        self.series.last().map(|record| record.period().as_str())
    }

    pub fn min_value(&self) -> Option<f64> {
        self.series.values().reduce(f64::min)
    }

    #[doc = "`Source: <provider> | Data as of <last period>` 형식의 캡션"]
    pub fn caption(&self, source: &str) -> Option<String> {
        self.last_period()
            .map(|last_period| format!("Source: {} | Data as of {}", source, last_period))
    }
}
