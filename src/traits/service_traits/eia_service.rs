use crate::common::*;

use crate::model::configs::eia_config::*;

#[async_trait]
pub trait EiaService: Send + Sync {
    #[doc = "
        Pull monthly spot prices for one product from the EIA API and write them as CSV
        # Returns
        * Number of rows written
    "]
    async fn pull_series(
        &self,
        eia_config: &EiaConfig,
        series_config: &EiaSeriesConfig,
        output_path: &Path,
    ) -> anyhow::Result<usize>;
}
