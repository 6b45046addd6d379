use crate::dto::normalized_series::*;
use crate::model::series::price_record::*;

pub trait SeriesService: Send + Sync {
    #[doc = "Sort records by period and compute the tick interval and max value"]
    fn normalize(&self, records: Vec<PriceRecord>) -> NormalizedSeries;
}
