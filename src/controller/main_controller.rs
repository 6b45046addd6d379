use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::{
    configs::{chart_config::*, eia_config::*, system_config::*},
    theme::{app_state::*, theme_palette::*},
};

use crate::dto::{chart_snapshot::*, rendered_chart::*};

use crate::enums::{chart_state::*, theme_action::*};

use crate::controller::chart_component::*;

use crate::traits::service_traits::{chart_load_service::*, chart_service::*, eia_service::*};

const LOADING_MESSAGE: &str = "Loading chart...";

#[derive(Debug, new)]
pub struct MainController<L: ChartLoadService + 'static, C: ChartService, E: EiaService> {
    load_service: Arc<L>,
    chart_service: C,
    eia_service: E,
    system_config: SystemConfig,
    charts: Vec<ChartConfig>,
    eia_config: EiaConfig,
}

impl<L: ChartLoadService + 'static, C: ChartService, E: EiaService> MainController<L, C, E> {
    #[doc = r#"
        차트 생성 작업 전체를 수행하는 핵심 함수.

        1. `eia.enabled`이면 EIA API에서 최신 월별 가격을 받아 리소스 CSV를 갱신한다
        2. 설정된 테마로 `AppState`를 만든다
        3. 모든 차트를 동시에 마운트/적재/렌더링한다 (`join_all`)
        4. 차트 하나의 실패가 다른 차트에 영향을 주지 않도록 결과는 차트별로 로그만 남긴다

        # Returns
        * `anyhow::Result<usize>` - 실제 데이터로 렌더링된 차트 수
    "#]
    pub async fn main_task(&self) -> anyhow::Result<usize> {
        if *self.eia_config.enabled() {
            self.refresh_eia_resources().await;
        }

        let app_state: AppState = reduce(
            &AppState::default(),
            ThemeAction::Set(*self.system_config.theme()),
        );

        info!(
            "Rendering {} chart(s) with the {} theme",
            self.charts.len(),
            app_state.theme()
        );

        let results: Vec<anyhow::Result<ChartState>> = join_all(
            self.charts
                .iter()
                .map(|chart| self.process_chart(chart, &app_state)),
        )
        .await;

        let mut rendered_cnt: usize = 0;

        for (chart, result) in self.charts.iter().zip(results) {
            match result {
                Ok(state) => {
                    info!("[{}] finished in state '{}'", chart.name(), state.label());
                    if let ChartState::Rendered(_) = state {
                        rendered_cnt += 1;
                    }
                }
                Err(e) => {
                    error!("[MainController->main_task] [{}] {:?}", chart.name(), e);
                }
            }
        }

        info!("{}/{} chart(s) rendered", rendered_cnt, self.charts.len());

        Ok(rendered_cnt)
    }

    #[doc = "EIA 시계열을 받아 리소스 디렉토리에 CSV로 저장. 실패해도 기존 파일로 계속 진행한다."]
    async fn refresh_eia_resources(&self) {
        for series_config in self.eia_config.series() {
            let output_path: PathBuf =
                resolve_path(self.system_config.resource_base_dir(), series_config.output());

            if let Err(e) = self
                .eia_service
                .pull_series(&self.eia_config, series_config, &output_path)
                .await
            {
                error!(
                    "[MainController->refresh_eia_resources] {}={} was not refreshed: {:?}",
                    series_config.facet(),
                    series_config.facet_value(),
                    e
                );
            }
        }
    }

    #[doc = r#"
        차트 하나를 마운트해서 적재가 끝날 때까지 기다린 뒤 SVG 파일로 저장하는 함수.

        1. `ChartComponent`를 마운트하고 `load_timeout_sec` 동안 결과를 기다린다
        2. `Failed` 상태면 `max_retry` 횟수만큼 `retry()` 한다
        3. 데이터 품질 지표를 한 번 로그로 남긴다
        4. 현재 테마로 `<name>.svg`를, `render_theme_variants`이면 반대 테마로 `<name>_<theme>.svg`도 저장한다
        5. 컴포넌트를 언마운트한다. 아직 진행 중인 적재는 취소된다

        # Returns
        * `anyhow::Result<ChartState>` - 파일로 저장된 시점의 차트 상태
    "#]
    pub async fn process_chart(
        &self,
        chart: &ChartConfig,
        app_state: &AppState,
    ) -> anyhow::Result<ChartState> {
        let timeout: Duration = Duration::from_secs(*self.system_config.load_timeout_sec());

        let mut component: ChartComponent<L> =
            ChartComponent::mount(Arc::new(chart.clone()), Arc::clone(&self.load_service));

        let mut snapshot: ChartSnapshot = component.wait_settled(timeout).await;
        let mut attempt: usize = 0;

        while snapshot.state().is_failed() && attempt < *self.system_config.max_retry() {
            attempt += 1;
            warn!(
                "[{}] load failed, retrying ({}/{})",
                chart.name(),
                attempt,
                self.system_config.max_retry()
            );

            component.retry();
            snapshot = component.wait_settled(timeout).await;
        }

        component.unmount().await;

        if let Some(quality) = snapshot.quality() {
            info!("[{}] data quality: {}", chart.name(), quality);
        }

        let mut themes: Vec<(String, AppState)> =
            vec![(format!("{}.svg", chart.name()), *app_state)];

        if *self.system_config.render_theme_variants() {
            let variant: AppState = reduce(app_state, ThemeAction::Toggle);
            themes.push((format!("{}_{}.svg", chart.name(), variant.theme()), variant));
        }

        for (file_name, theme_state) in &themes {
            let svg: String = self
                .render_snapshot(chart, snapshot.state(), theme_state.palette())
                .await?;

            let output_path: PathBuf = resolve_path(self.system_config.output_dir(), file_name);
            write_text_file(&output_path, &svg).await?;

            info!("[{}] saved {:?}", chart.name(), output_path);
        }

        let ChartSnapshot { state, .. } = snapshot;
        Ok(state)
    }

    #[doc = "차트 상태에 맞는 SVG 생성. 데이터가 없으면 제목과 메시지만 있는 카드를 그린다."]
    async fn render_snapshot(
        &self,
        chart: &ChartConfig,
        state: &ChartState,
        palette: &ThemePalette,
    ) -> anyhow::Result<String> {
        match state {
            ChartState::Rendered(series) => {
                let rendered: RenderedChart = self
                    .chart_service
                    .render_chart(chart, series, palette)
                    .await?;
                info!(
                    "[{}] {} point(s), {}",
                    chart.name(),
                    rendered.point_count(),
                    rendered.caption()
                );
                Ok(rendered.svg)
            }
            ChartState::Loading => {
                self.chart_service
                    .render_placeholder(chart, LOADING_MESSAGE, palette)
                    .await
            }
            ChartState::Failed(message) => {
                let failure_message: String = format!(
                    "Could not load chart data ({}). Run again to retry.",
                    message
                );
                self.chart_service
                    .render_placeholder(chart, &failure_message, palette)
                    .await
            }
        }
    }
}
