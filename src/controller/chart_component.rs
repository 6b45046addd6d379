use crate::common::*;

use crate::dto::{chart_snapshot::*, load_outcome::*};
use crate::enums::chart_state::*;
use crate::model::configs::chart_config::*;
use crate::traits::service_traits::chart_load_service::*;

#[doc = r#"
    차트 하나의 생명주기를 담당하는 컴포넌트.

    마운트 시 한 번 데이터를 적재하고 그 결과를 watch 채널로 발행한다.
    상태 전이: `Loading` → `Rendered` | `Failed`, `Failed` → (`retry`) → `Loading`.
    유효한 행이 하나도 없으면 `Loading`에 머무르되 품질 지표는 함께 발행한다.
    언마운트(또는 drop) 이후에는 적재 작업이 상태를 절대 갱신하지 않는다.
"#]
pub struct ChartComponent<L: ChartLoadService + 'static> {
    chart: Arc<ChartConfig>,
    load_service: Arc<L>,
    state_tx: Arc<watch::Sender<ChartSnapshot>>,
    state_rx: watch::Receiver<ChartSnapshot>,
    cancel_tx: watch::Sender<bool>,
    task: Option<tokio::task::JoinHandle<()>>,
}

#[doc = "취소 신호가 오거나 컴포넌트가 사라질 때까지 대기"]
async fn wait_cancelled(cancel_rx: &mut watch::Receiver<bool>) {
    while !*cancel_rx.borrow_and_update() {
        if cancel_rx.changed().await.is_err() {
            return;
        }
    }
}

fn snapshot_from_outcome(chart_name: &str, outcome: anyhow::Result<LoadOutcome>) -> ChartSnapshot {
    match outcome {
        Ok(outcome) => {
            let LoadOutcome { series, quality } = outcome;

            if series.is_empty() {
                warn!(
                    "[ChartComponent] '{}' has no usable rows, staying in loading state ({})",
                    chart_name, quality
                );
                ChartSnapshot::new(ChartState::Loading, Some(quality))
            } else {
                info!("[ChartComponent] '{}' loaded ({})", chart_name, quality);
                ChartSnapshot::new(ChartState::Rendered(Arc::new(series)), Some(quality))
            }
        }
        Err(e) => {
            error!("[ChartComponent] '{}' failed to load: {:#}", chart_name, e);
            ChartSnapshot::new(ChartState::Failed(format!("{:#}", e)), None)
        }
    }
}

impl<L: ChartLoadService + 'static> ChartComponent<L> {
    pub fn mount(chart: Arc<ChartConfig>, load_service: Arc<L>) -> Self {
        let (state_tx, state_rx) = watch::channel(ChartSnapshot::loading());
        let (cancel_tx, _) = watch::channel(false);

        let mut component: ChartComponent<L> = ChartComponent {
            chart,
            load_service,
            state_tx: Arc::new(state_tx),
            state_rx,
            cancel_tx,
            task: None,
        };

        component.spawn_load();
        component
    }

    fn spawn_load(&mut self) {
        let chart: Arc<ChartConfig> = Arc::clone(&self.chart);
        let load_service: Arc<L> = Arc::clone(&self.load_service);
        let state_tx: Arc<watch::Sender<ChartSnapshot>> = Arc::clone(&self.state_tx);
        let mut cancel_rx: watch::Receiver<bool> = self.cancel_tx.subscribe();

        self.task = Some(tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = wait_cancelled(&mut cancel_rx) => {
                    info!("[ChartComponent] '{}' load cancelled", chart.name());
                }
                outcome = load_service.load(&chart) => {
                    if *cancel_rx.borrow() {
                        return;
                    }
                    state_tx.send_replace(snapshot_from_outcome(chart.name(), outcome));
                }
            }
        }));
    }

    pub fn snapshot(&self) -> ChartSnapshot {
        self.state_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ChartSnapshot> {
        self.state_rx.clone()
    }

    #[doc = r#"
        적재가 끝날 때까지(또는 timeout까지) 기다린 뒤 현재 상태를 반환한다.

        끝나지 않는 조회는 오류가 아니며, timeout 후에도 `Loading` 상태가 그대로 반환된다.
    "#]
    pub async fn wait_settled(&self, timeout: Duration) -> ChartSnapshot {
        let mut state_rx: watch::Receiver<ChartSnapshot> = self.subscribe();

        let settled: bool = tokio::time::timeout(timeout, state_rx.wait_for(|s| s.is_settled()))
            .await
            .map(|res| res.is_ok())
            .unwrap_or(false);

        if !settled {
            warn!(
                "[ChartComponent->wait_settled] '{}' still loading after {:?}",
                self.chart.name(),
                timeout
            );
        }

        self.snapshot()
    }

    #[doc = "`Failed` 상태일 때만 `Loading`으로 되돌리고 다시 적재한다. 재시도했으면 true"]
    pub fn retry(&mut self) -> bool {
        if !self.state_rx.borrow().state().is_failed() {
            return false;
        }

        if let Some(task) = self.task.take() {
            task.abort();
        }

        self.state_tx.send_replace(ChartSnapshot::loading());
        self.spawn_load();
        true
    }

    #[doc = "취소 신호를 보내고 적재 작업이 끝날 때까지 기다린다."]
    pub async fn unmount(mut self) {
        self.cancel_tx.send_replace(true);

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    error!(
                        "[ChartComponent->unmount] '{}' load task panicked: {:?}",
                        self.chart.name(),
                        e
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{data_quality::*, normalized_series::*};
    use crate::model::series::{price_record::*, series::*};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn chart() -> Arc<ChartConfig> {
        Arc::new(ChartConfig::new(
            "brent_crude".to_string(),
            "Brent Crude Oil".to_string(),
            "brent_crude_monthly.csv".to_string(),
            "period".to_string(),
            "price_per_barrel".to_string(),
            "$".to_string(),
            "Price".to_string(),
            "#2563eb".to_string(),
            "U.S. Energy Information Administration".to_string(),
        ))
    }

    fn outcome(records: Vec<PriceRecord>) -> LoadOutcome {
        let kept: usize = records.len();
        let len: usize = records.len();
        LoadOutcome::new(
            NormalizedSeries::new(Series::from_records(records), (len / 8).max(1), None, 0),
            DataQuality::new(kept, kept, 0, 0, 0, 0),
        )
    }

    struct PendingLoader;

    #[async_trait]
    impl ChartLoadService for PendingLoader {
        async fn load(&self, _chart: &ChartConfig) -> anyhow::Result<LoadOutcome> {
            futures::future::pending::<()>().await;
            unreachable!()
        }
    }

    struct EmptyLoader;

    #[async_trait]
    impl ChartLoadService for EmptyLoader {
        async fn load(&self, _chart: &ChartConfig) -> anyhow::Result<LoadOutcome> {
            Ok(outcome(Vec::new()))
        }
    }

    struct SlowLoader;

    #[async_trait]
    impl ChartLoadService for SlowLoader {
        async fn load(&self, _chart: &ChartConfig) -> anyhow::Result<LoadOutcome> {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(outcome(vec![PriceRecord::new("2024-01".to_string(), 80.5)]))
        }
    }

    #[derive(Default)]
    struct FlakyLoader {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChartLoadService for FlakyLoader {
        async fn load(&self, _chart: &ChartConfig) -> anyhow::Result<LoadOutcome> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(anyhow!("resource unavailable"));
            }
            Ok(outcome(vec![
                PriceRecord::new("2024-01".to_string(), 80.5),
                PriceRecord::new("2024-03".to_string(), 82.1),
            ]))
        }
    }

    #[tokio::test]
    async fn never_resolving_fetch_stays_loading() {
        let component = ChartComponent::mount(chart(), Arc::new(PendingLoader));

        let snapshot: ChartSnapshot = component.wait_settled(Duration::from_millis(50)).await;

        assert!(snapshot.state().is_loading());
        assert!(snapshot.quality().is_none());
        component.unmount().await;
    }

    #[tokio::test]
    async fn empty_resource_stays_loading_with_quality() {
        let component = ChartComponent::mount(chart(), Arc::new(EmptyLoader));

        let snapshot: ChartSnapshot = component.wait_settled(Duration::from_secs(5)).await;

        assert!(snapshot.state().is_loading());
        assert_eq!(snapshot.quality().as_ref().map(|q| *q.kept_rows()), Some(0));
        component.unmount().await;
    }

    #[tokio::test]
    async fn unmount_before_resolution_never_publishes() {
        let component = ChartComponent::mount(chart(), Arc::new(SlowLoader));
        let mut observer: watch::Receiver<ChartSnapshot> = component.subscribe();
        observer.borrow_and_update();

        tokio::time::sleep(Duration::from_millis(10)).await;
        component.unmount().await;
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(!observer.has_changed().unwrap_or(false));
        assert!(observer.borrow().state().is_loading());
    }

    #[tokio::test]
    async fn failed_load_can_be_retried() {
        let loader: Arc<FlakyLoader> = Arc::new(FlakyLoader::default());
        let mut component = ChartComponent::mount(chart(), Arc::clone(&loader));

        let first: ChartSnapshot = component.wait_settled(Duration::from_secs(5)).await;
        assert!(first.state().is_failed());

        assert!(component.retry());
        let second: ChartSnapshot = component.wait_settled(Duration::from_secs(5)).await;

        match second.state() {
            ChartState::Rendered(series) => {
                assert_eq!(series.last_period(), Some("2024-03"));
            }
            other => panic!("expected rendered state, got {:?}", other),
        }
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);

        /* retry is a no-op outside the failed state */
        assert!(!component.retry());
        component.unmount().await;
    }
}
