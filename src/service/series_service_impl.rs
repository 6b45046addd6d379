use crate::dto::normalized_series::*;
use crate::model::series::{price_record::*, series::*};
use crate::traits::service_traits::series_service::*;

/* X축에 보일 라벨 개수의 목표치 */
const TARGET_TICK_COUNT: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct SeriesServiceImpl;

impl SeriesServiceImpl {
    pub fn new() -> Self {
        SeriesServiceImpl
    }

    #[doc = "라벨 간격 = floor(len / 8), 최소 1"]
    pub fn calculate_tick_interval(len: usize) -> usize {
        (len / TARGET_TICK_COUNT).max(1)
    }

    fn calculate_max_value(records: &[PriceRecord]) -> Option<f64> {
        records.iter().map(|record| record.value).reduce(f64::max)
    }

    fn count_duplicate_periods(records: &[PriceRecord]) -> usize {
        records
            .windows(2)
            .filter(|pair| pair[0].period == pair[1].period)
            .count()
    }
}

impl SeriesService for SeriesServiceImpl {
    #[doc = r#"
        검증된 레코드를 기간 오름차순으로 정렬하고 렌더러 입력값을 계산하는 함수.

        기간은 `YYYY-MM` 형식이 보장되어 있으므로 문자열 비교가 곧 시간 순서이다.
        정렬은 안정 정렬이라 같은 기간의 레코드는 입력 순서를 유지한다.
    "#]
    fn normalize(&self, mut records: Vec<PriceRecord>) -> NormalizedSeries {
        records.sort_by(|a, b| a.period.cmp(&b.period));

        let tick_interval: usize = Self::calculate_tick_interval(records.len());
        let max_value: Option<f64> = Self::calculate_max_value(&records);
        let duplicate_periods: usize = Self::count_duplicate_periods(&records);

        NormalizedSeries::new(
            Series::from_records(records),
            tick_interval,
            max_value,
            duplicate_periods,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(period: &str, value: f64) -> PriceRecord {
        PriceRecord::new(period.to_string(), value)
    }

    #[test]
    fn sorts_unsorted_input_by_period() {
        let normalized: NormalizedSeries = SeriesServiceImpl::new()
            .normalize(vec![record("2024-03", 70.0), record("2024-01", 60.0)]);

        assert_eq!(
            normalized.series().records(),
            &vec![record("2024-01", 60.0), record("2024-03", 70.0)]
        );
        assert_eq!(normalized.last_period(), Some("2024-03"));
    }

    #[test]
    fn result_is_non_decreasing_and_sort_is_idempotent() {
        let service = SeriesServiceImpl::new();
        let periods = ["2023-11", "2021-02", "2024-06", "2021-02", "2022-12", "2023-01"];
        let input: Vec<PriceRecord> = periods
            .iter()
            .enumerate()
            .map(|(i, p)| record(p, i as f64))
            .collect();

        let once: NormalizedSeries = service.normalize(input);
        let periods: Vec<&str> = once.series().periods().collect();
        assert!(periods.windows(2).all(|w| w[0] <= w[1]));

        let twice: NormalizedSeries = service.normalize(once.series().records().clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicates_are_kept_in_input_order() {
        let normalized: NormalizedSeries = SeriesServiceImpl::new().normalize(vec![
            record("2024-02", 2.0),
            record("2024-01", 1.0),
            record("2024-02", 3.0),
        ]);

        let values: Vec<f64> = normalized.series().values().collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(*normalized.duplicate_periods(), 1);
    }

    #[test]
    fn tick_interval_is_floor_len_over_eight_with_minimum_one() {
        assert_eq!(SeriesServiceImpl::calculate_tick_interval(1), 1);
        assert_eq!(SeriesServiceImpl::calculate_tick_interval(7), 1);
        assert_eq!(SeriesServiceImpl::calculate_tick_interval(8), 1);
        assert_eq!(SeriesServiceImpl::calculate_tick_interval(17), 2);
        assert_eq!(SeriesServiceImpl::calculate_tick_interval(60), 7);
        assert_eq!(SeriesServiceImpl::calculate_tick_interval(64), 8);
    }

    #[test]
    fn computes_max_value_and_caption() {
        let normalized: NormalizedSeries = SeriesServiceImpl::new().normalize(vec![
            record("2024-01", 80.5),
            record("2024-03", 82.1),
            record("2024-02", 79.0),
        ]);

        assert_eq!(*normalized.max_value(), Some(82.1));
        assert_eq!(normalized.min_value(), Some(79.0));
        assert_eq!(
            normalized.caption("U.S. Energy Information Administration").as_deref(),
            Some("Source: U.S. Energy Information Administration | Data as of 2024-03")
        );
    }

    #[test]
    fn empty_input_gives_empty_series() {
        let normalized: NormalizedSeries = SeriesServiceImpl::new().normalize(Vec::new());

        assert!(normalized.is_empty());
        assert_eq!(*normalized.tick_interval(), 1);
        assert_eq!(*normalized.max_value(), None);
        assert_eq!(normalized.caption("EIA"), None);
    }
}
