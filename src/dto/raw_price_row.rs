use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    CSV 데이터 한 줄을 텍스트 그대로 담는 DTO

    # Fields
    * `period` - 기간 컬럼 값. 컬럼이 없거나 비어있으면 빈 문자열
    * `value` - 가격 컬럼 값. 컬럼이 없거나 비어있으면 빈 문자열
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct RawPriceRow {
    pub period: String,
    pub value: String,
}

impl FromCsvRecord for RawPriceRow {
    fn from_csv_record(record: &StringRecord, column_index: &CsvColumnIndex) -> Self {
        let field = |idx: Option<usize>| -> String {
            idx.and_then(|i| record.get(i))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        RawPriceRow::new(
            field(*column_index.period_idx()),
            field(*column_index.value_idx()),
        )
    }
}
