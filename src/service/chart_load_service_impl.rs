use crate::common::*;

use crate::dto::{data_quality::*, load_outcome::*, normalized_series::*, parsed_rows::*};
use crate::model::{configs::chart_config::*, series::price_record::*};
use crate::traits::repository_traits::resource_repository::*;
use crate::traits::service_traits::{chart_load_service::*, parser_service::*, series_service::*};

#[derive(Debug, new)]
pub struct ChartLoadServiceImpl<R: ResourceRepository, P: ParserService, S: SeriesService> {
    resource_repository: R,
    parser_service: P,
    series_service: S,
}

#[async_trait]
impl<R, P, S> ChartLoadService for ChartLoadServiceImpl<R, P, S>
where
    R: ResourceRepository,
    P: ParserService,
    S: SeriesService,
{
    #[doc = r#"
        리소스 하나를 시계열로 만드는 파이프라인.

        1. `ResourceRepository`로 원시 텍스트를 한 번 조회한다
        2. `ParserService`로 행을 나누고 숫자/기간 검증을 거친다
        3. `SeriesService`로 기간 오름차순 정렬 및 라벨 간격, 최댓값을 계산한다
        4. 중복 기간 수를 품질 지표에 반영해서 함께 반환한다
    "#]
    async fn load(&self, chart: &ChartConfig) -> anyhow::Result<LoadOutcome> {
        let raw_text: String = self
            .resource_repository
            .fetch_text(chart.resource())
            .await
            .with_context(|| {
                format!(
                    "[ChartLoadServiceImpl->load] Failed to fetch resource of '{}'",
                    chart.name()
                )
            })?;

        let parsed: ParsedRows = self
            .parser_service
            .parse_rows(&raw_text, &chart.column_mapping());

        let (records, mut quality): (Vec<PriceRecord>, DataQuality) =
            self.parser_service.validate_rows(parsed).into_parts();

        let series: NormalizedSeries = self.series_service.normalize(records);
        quality.set_duplicate_periods(*series.duplicate_periods());

        Ok(LoadOutcome::new(series, quality))
    }
}
