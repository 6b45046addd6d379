use crate::common::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct PriceRecord {
    pub period: String,
    pub value: f64,
}
