use crate::common::*;

#[doc = r#"
    기간 문자열이 0으로 채워진 `YYYY-MM` 형식인지 검증하고 해당 월의 1일을 반환한다.

    `YYYY-MM` 형식이면 문자열 비교 순서와 시간 순서가 같아지므로,
    정렬 전에 이 형식을 보장해야 한다. `2024-1`, `2024-13`, `Jan 2024` 등은 `None`.
"#]
pub fn parse_period(period: &str) -> Option<NaiveDate> {
    let bytes: &[u8] = period.as_bytes();

    if bytes.len() != 7 || bytes[4] != b'-' {
        return None;
    }

    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || b.is_ascii_digit())
    {
        return None;
    }

    NaiveDate::parse_from_str(&format!("{}-01", period), "%Y-%m-%d").ok()
}

pub fn is_valid_period(period: &str) -> bool {
    parse_period(period).is_some()
}
