use crate::common::*;

use crate::dto::data_quality::*;
use crate::model::series::price_record::*;

#[derive(Debug, Clone, Default, Getters, new)]
#[getset(get = "pub")]
pub struct ValidatedRows {
    pub records: Vec<PriceRecord>,
    pub quality: DataQuality,
}

impl ValidatedRows {
    pub fn into_parts(self) -> (Vec<PriceRecord>, DataQuality) {
        (self.records, self.quality)
    }
}
