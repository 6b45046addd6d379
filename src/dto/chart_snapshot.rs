use crate::common::*;

use crate::dto::data_quality::*;
use crate::enums::chart_state::*;

#[doc = "watch 채널로 발행되는 차트 컴포넌트의 현재 상태와 마지막 데이터 품질 지표"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChartSnapshot {
    pub state: ChartState,
    pub quality: Option<DataQuality>,
}

impl ChartSnapshot {
    pub fn loading() -> Self {
        ChartSnapshot::new(ChartState::Loading, None)
    }

    #[doc = "적재가 끝났는지 여부. 빈 데이터로 끝난 경우 `Loading`이지만 품질 지표가 존재한다."]
    pub fn is_settled(&self) -> bool {
        !self.state.is_loading() || self.quality.is_some()
    }
}
