use crate::common::*;

use crate::dto::{normalized_series::*, rendered_chart::*};
use crate::model::{configs::chart_config::*, theme::theme_palette::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render a time-series line chart as an SVG document
        # Arguments
        * `chart` - Title, colours, currency prefix and source of the chart
        * `series` - Normalized, non-empty series
        * `palette` - Colours of the active theme
    "]
    async fn render_chart(
        &self,
        chart: &ChartConfig,
        series: &NormalizedSeries,
        palette: &ThemePalette,
    ) -> anyhow::Result<RenderedChart>;

    #[doc = "Render a static card with the chart title and a status message"]
    async fn render_placeholder(
        &self,
        chart: &ChartConfig,
        message: &str,
        palette: &ThemePalette,
    ) -> anyhow::Result<String>;
}
