use crate::common::*;

use crate::model::configs::chart_config::*;

#[doc = "헤더 행에서 찾은 기간/가격 컬럼의 위치. 컬럼이 없으면 `None`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct CsvColumnIndex {
    pub period_idx: Option<usize>,
    pub value_idx: Option<usize>,
}

impl CsvColumnIndex {
    pub fn from_headers(headers: &StringRecord, columns: &ColumnMapping) -> Self {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };

        CsvColumnIndex::new(
            position(columns.period_column().as_str()),
            position(columns.value_column().as_str()),
        )
    }
}

/* CSV record → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromCsvRecord {
    fn from_csv_record(record: &StringRecord, column_index: &CsvColumnIndex) -> Self;
}
