use crate::common::*;

use crate::dto::{data_quality::*, normalized_series::*};

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct LoadOutcome {
    pub series: NormalizedSeries,
    pub quality: DataQuality,
}
