use crate::common::*;

use crate::dto::load_outcome::*;
use crate::model::configs::chart_config::*;

#[async_trait]
pub trait ChartLoadService: Send + Sync {
    #[doc = "
        Fetch, parse, validate and normalize the resource of one chart
        # Arguments
        * `chart` - Chart configuration naming the resource and its columns
    "]
    async fn load(&self, chart: &ChartConfig) -> anyhow::Result<LoadOutcome>;
}
