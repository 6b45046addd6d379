use crate::common::*;

use crate::dto::{data_quality::*, parsed_rows::*, raw_price_row::*, validated_rows::*};
use crate::model::{configs::chart_config::*, series::price_record::*};
use crate::traits::service_traits::parser_service::*;
use crate::utils_modules::{time_utils::*, traits::*};

#[derive(Debug, Clone, new)]
pub struct CsvParserServiceImpl {
    delimiter: u8,
}

impl CsvParserServiceImpl {
    #[doc = "빈 줄(또는 공백만 있는 줄)은 필드가 하나뿐이고 그 값이 비어있는 레코드로 읽힌다."]
    fn is_blank_record(record: &StringRecord) -> bool {
        record.len() <= 1 && record.get(0).map_or(true, |field| field.trim().is_empty())
    }

    #[doc = r#"
        닫히지 않은 따옴표가 뒤따르는 줄들을 삼킨 레코드인지 여부.

        가격/기간 데이터에는 줄바꿈이 들어갈 수 없으므로 필드 안의 줄바꿈은 깨진 행으로 본다.
    "#]
    fn is_quote_swallowed(record: &StringRecord) -> bool {
        record
            .iter()
            .any(|field| field.contains('\n') || field.contains('\r'))
    }

    #[doc = "가격 문자열을 유한한 f64로 변환. 실패하면 None"]
    fn parse_price(value: &str) -> Option<f64> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
    }
}

impl ParserService for CsvParserServiceImpl {
    #[doc = r#"
        원시 CSV 텍스트를 텍스트 행 목록으로 변환하는 함수.

        1. 비어있지 않은 첫 줄을 헤더로 사용하고, 설정된 기간/가격 컬럼의 위치를 찾는다
        2. 이후의 각 줄은 헤더 위치에 맞춰 `RawPriceRow`로 변환한다
        3. 빈 줄은 레코드도 오류도 만들지 않고 건너뛴다
        4. 컬럼 수가 맞지 않는 줄은 그대로 통과시키며, 없는 필드는 빈 문자열이 된다
        5. CSV 리더가 해석하지 못한 레코드와, 닫히지 않은 따옴표 때문에 여러 줄을 삼킨 레코드는
           `malformed_rows`로만 집계한다
    "#]
    fn parse_rows(&self, raw_text: &str, columns: &ColumnMapping) -> ParsedRows {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .has_headers(false)
            .from_reader(raw_text.as_bytes());

        let mut column_index: Option<CsvColumnIndex> = None;
        let mut rows: Vec<RawPriceRow> = Vec::new();
        let mut total_rows: usize = 0;
        let mut malformed_rows: usize = 0;

        for result in reader.records() {
            let record: StringRecord = match result {
                Ok(record) => record,
                Err(_) => {
                    /* 헤더가 나오기 전의 깨진 줄은 데이터 행이 아니다 */
                    if column_index.is_some() {
                        total_rows += 1;
                        malformed_rows += 1;
                    }
                    continue;
                }
            };

            if Self::is_blank_record(&record) {
                continue;
            }

            match &column_index {
                None => {
                    column_index = Some(CsvColumnIndex::from_headers(&record, columns));
                }
                Some(index) => {
                    total_rows += 1;

                    if Self::is_quote_swallowed(&record) {
                        malformed_rows += 1;
                        continue;
                    }

                    rows.push(RawPriceRow::from_csv_record(&record, index));
                }
            }
        }

        if let Some(index) = &column_index {
            if index.period_idx().is_none() || index.value_idx().is_none() {
                warn!(
                    "[CsvParserServiceImpl->parse_rows] Header is missing '{}' or '{}'",
                    columns.period_column(),
                    columns.value_column()
                );
            }
        }

        ParsedRows::new(rows, total_rows, malformed_rows)
    }

    #[doc = r#"
        텍스트 행을 검증하여 `PriceRecord`만 남기는 함수.

        가격이 숫자가 아니거나 유한하지 않으면 제외하고, 기간이 `YYYY-MM` 형식이 아니면 제외한다.
        제외된 행은 로그로 남기지 않고 `DataQuality`의 카운터로만 집계한다.
    "#]
    fn validate_rows(&self, parsed: ParsedRows) -> ValidatedRows {
        let ParsedRows {
            rows,
            total_rows,
            malformed_rows,
        } = parsed;

        let mut quality: DataQuality = DataQuality::default();
        quality.set_total_rows(total_rows);
        quality.set_malformed_rows(malformed_rows);

        let mut records: Vec<PriceRecord> = Vec::with_capacity(rows.len());

        for row in rows {
            let value: f64 = match Self::parse_price(row.value()) {
                Some(value) => value,
                None => {
                    quality.dropped_non_numeric += 1;
                    continue;
                }
            };

            if !is_valid_period(row.period()) {
                quality.dropped_invalid_period += 1;
                continue;
            }

            records.push(PriceRecord::new(row.period, value));
        }

        quality.set_kept_rows(records.len());

        ValidatedRows::new(records, quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barrel_columns() -> ColumnMapping {
        ColumnMapping::new("period".to_string(), "price_per_barrel".to_string())
    }

    fn parse_and_validate(raw_text: &str) -> ValidatedRows {
        let parser = CsvParserServiceImpl::new(b',');
        let parsed: ParsedRows = parser.parse_rows(raw_text, &barrel_columns());
        parser.validate_rows(parsed)
    }

    fn pairs(validated: &ValidatedRows) -> Vec<(String, f64)> {
        validated
            .records()
            .iter()
            .map(|r| (r.period().clone(), *r.value()))
            .collect()
    }

    #[test]
    fn non_numeric_rows_are_dropped_and_counted() {
        let csv = "period,price_per_barrel\n2024-01,80.5\n2024-02,abc\n2024-03,82.1\n";
        let validated: ValidatedRows = parse_and_validate(csv);

        assert_eq!(
            pairs(&validated),
            vec![("2024-01".to_string(), 80.5), ("2024-03".to_string(), 82.1)]
        );
        assert_eq!(*validated.quality().total_rows(), 3);
        assert_eq!(*validated.quality().kept_rows(), 2);
        assert_eq!(*validated.quality().dropped_non_numeric(), 1);
    }

    #[test]
    fn empty_lines_are_ignored() {
        let compact = "period,price_per_barrel\n2024-01,80.5\n2024-03,82.1\n";
        let spaced = "\n\nperiod,price_per_barrel\n\n2024-01,80.5\n   \n\n2024-03,82.1\n\n";

        let a: ValidatedRows = parse_and_validate(compact);
        let b: ValidatedRows = parse_and_validate(spaced);

        assert_eq!(pairs(&a), pairs(&b));
        assert_eq!(a.quality(), b.quality());
    }

    #[test]
    fn header_only_yields_no_rows() {
        let validated: ValidatedRows = parse_and_validate("period,price_per_barrel\n");
        assert!(validated.records().is_empty());
        assert_eq!(validated.quality(), &DataQuality::default());

        let validated: ValidatedRows = parse_and_validate("");
        assert!(validated.records().is_empty());
    }

    #[test]
    fn n_good_rows_survive_m_bad_rows() {
        let mut csv = String::from("period,price_per_barrel,product\n");
        for month in 1..=9 {
            csv.push_str(&format!("2023-{:02},{}.25,Brent\n", month, 70 + month));
        }
        for bad in ["", "n/a", "NaN", "inf", "12.5x"] {
            csv.push_str(&format!("2022-01,{},Brent\n", bad));
        }

        let validated: ValidatedRows = parse_and_validate(&csv);

        assert_eq!(validated.records().len(), 9);
        assert_eq!(*validated.quality().dropped_non_numeric(), 5);
        assert_eq!(*validated.quality().total_rows(), 14);
    }

    #[test]
    fn ragged_rows_pass_through_then_get_filtered() {
        let csv = "period,price_per_barrel\n2024-01\n2024-02,81.0,extra,fields\n";
        let validated: ValidatedRows = parse_and_validate(csv);

        assert_eq!(pairs(&validated), vec![("2024-02".to_string(), 81.0)]);
        assert_eq!(*validated.quality().dropped_non_numeric(), 1);
    }

    #[test]
    fn columns_are_found_by_name_not_position() {
        let csv = "product,price_per_barrel,period\nBrent,80.5,2024-01\n";
        let validated: ValidatedRows = parse_and_validate(csv);

        assert_eq!(pairs(&validated), vec![("2024-01".to_string(), 80.5)]);
    }

    #[test]
    fn missing_value_column_drops_everything() {
        let csv = "period,price_per_mmbtu\n2024-01,2.5\n2024-02,2.7\n";
        let validated: ValidatedRows = parse_and_validate(csv);

        assert!(validated.records().is_empty());
        assert_eq!(*validated.quality().dropped_non_numeric(), 2);
    }

    #[test]
    fn invalid_periods_are_dropped_and_counted() {
        let csv = "period,price_per_barrel\n2024-1,80\n2024-13,81\nJan 2024,82\n2024-04,83\n";
        let validated: ValidatedRows = parse_and_validate(csv);

        assert_eq!(pairs(&validated), vec![("2024-04".to_string(), 83.0)]);
        assert_eq!(*validated.quality().dropped_invalid_period(), 3);
    }

    #[test]
    fn quality_counters_add_up() {
        let csv = "period,price_per_barrel\n2024-01,80\n2024-02,x\n2024/03,81\n2024-04,  82.75 \n";
        let validated: ValidatedRows = parse_and_validate(csv);
        let q: &DataQuality = validated.quality();

        assert_eq!(*q.kept_rows(), 2);
        assert_eq!(q.kept_rows() + q.dropped_rows(), *q.total_rows());
    }

    #[test]
    fn unbalanced_quote_swallowing_lines_counts_as_malformed() {
        let csv = "period,price_per_barrel\n2024-01,\"80.5\n2024-02,81.0\n2024-03,82.1\n";
        let validated: ValidatedRows = parse_and_validate(csv);
        let q: &DataQuality = validated.quality();

        assert!(validated.records().is_empty());
        assert_eq!(*q.total_rows(), 1);
        assert_eq!(*q.malformed_rows(), 1);
        assert_eq!(*q.dropped_non_numeric(), 0);
        assert_eq!(q.kept_rows() + q.dropped_rows(), *q.total_rows());
    }

    #[test]
    fn rows_before_an_unbalanced_quote_are_kept() {
        let csv = "period,price_per_barrel\n2024-01,80.5\n2024-02,\"81.0\n2024-03,82.1\n";
        let validated: ValidatedRows = parse_and_validate(csv);

        assert_eq!(pairs(&validated), vec![("2024-01".to_string(), 80.5)]);
        assert_eq!(*validated.quality().malformed_rows(), 1);
        assert_eq!(*validated.quality().total_rows(), 2);
    }

    #[test]
    fn trailing_garbage_after_a_number_is_rejected_not_truncated() {
        let csv = "period,price_per_barrel\n2024-01,12.5x\n2024-02,80abc\n2024-03,1e2\n";
        let validated: ValidatedRows = parse_and_validate(csv);

        assert_eq!(pairs(&validated), vec![("2024-03".to_string(), 100.0)]);
        assert_eq!(*validated.quality().dropped_non_numeric(), 2);
    }

    #[test]
    fn byte_order_mark_in_header_is_ignored() {
        let csv = "\u{feff}period,price_per_barrel\n2024-01,80.5\n";
        let validated: ValidatedRows = parse_and_validate(csv);

        assert_eq!(validated.records().len(), 1);
    }
}
