use crate::common::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct RenderedChart {
    pub svg: String,
    pub caption: String,
    pub point_count: usize,
}
