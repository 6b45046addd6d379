use crate::common::*;

use crate::dto::normalized_series::*;

#[doc = r#"
    차트 컴포넌트의 상태.

    * `Loading`  - 데이터 수신 전, 또는 수신했지만 유효한 행이 하나도 없는 경우
    * `Rendered` - 정규화된 시계열을 보유한 상태
    * `Failed`   - 리소스 조회/파싱 실패. `retry()`로 다시 `Loading`이 된다
"#]
#[derive(Debug, Clone)]
pub enum ChartState {
    Loading,
    Rendered(Arc<NormalizedSeries>),
    Failed(String),
}

impl ChartState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ChartState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ChartState::Failed(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartState::Loading => "loading",
            ChartState::Rendered(_) => "rendered",
            ChartState::Failed(_) => "failed",
        }
    }
}
