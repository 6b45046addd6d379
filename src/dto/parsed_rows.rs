use crate::common::*;

use crate::dto::raw_price_row::*;

#[derive(Debug, Clone, Default, Getters, new)]
#[getset(get = "pub")]
pub struct ParsedRows {
    pub rows: Vec<RawPriceRow>,
    pub total_rows: usize,
    pub malformed_rows: usize,
}
