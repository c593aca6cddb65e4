use chrono::Utc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::selection::Selection;
use crate::models::view::DashboardView;
use crate::Dashboard;

/// How many triggers may wait in the queue before producers back off.
pub const TRIGGER_QUEUE_CAPACITY: usize = 32;

/// Something that asks the dashboard to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Periodic timer fired: refresh cards and chart.
    Tick,
    /// The user picked another coin or range: refresh the chart only.
    SelectionChanged(Selection),
}

/// Drives the two refresh pipelines and owns the current view.
///
/// - `Tick` → price fetch → cards, and history fetch → chart. The two
///   pipelines are independent; one failing does not skip the other.
/// - `SelectionChanged` → history fetch → chart, for the new selection.
///   Cards are left alone until the next tick. Re-selecting the current
///   selection is not a change and does nothing.
///
/// A failed pipeline keeps its previous output (stale data) and records
/// the error message in the view until it next succeeds. There is no retry
/// other than the next trigger.
///
/// A selection only takes effect once its chart has been fetched. If the
/// history fetch for a new selection fails, the driver stays on the
/// previous selection, so `view.selection` always names the chart on
/// screen. Posting the selection again retries it.
pub struct RefreshDriver {
    dashboard: Dashboard,
    selection: Selection,
    view: DashboardView,
}

impl RefreshDriver {
    pub fn new(dashboard: Dashboard, selection: Selection) -> Self {
        let chart = dashboard.empty_chart(selection);
        Self {
            dashboard,
            selection,
            view: DashboardView {
                revision: 0,
                selection,
                cards: Vec::new(),
                chart,
                cards_updated_at: None,
                chart_updated_at: None,
                cards_error: None,
                chart_error: None,
            },
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    /// Handle one trigger to completion.
    ///
    /// Returns the first pipeline error, if any. The view is updated either
    /// way, and its revision is bumped whenever the trigger was acted upon.
    pub async fn handle(&mut self, trigger: Trigger) -> Result<(), CoreError> {
        let result = match trigger {
            Trigger::Tick => {
                info!(selection = %self.selection, "tick: refreshing cards and chart");
                let cards = self.refresh_cards().await;
                let chart = self.refresh_chart().await;
                cards.and(chart)
            }
            Trigger::SelectionChanged(selection) => {
                if selection == self.selection {
                    debug!(%selection, "selection unchanged, nothing to do");
                    return Ok(());
                }
                info!(from = %self.selection, to = %selection, "selection changed: refreshing chart");
                let previous = std::mem::replace(&mut self.selection, selection);
                let result = self.refresh_chart().await;
                if result.is_err() {
                    self.selection = previous;
                }
                result
            }
        };

        self.view.revision += 1;
        result
    }

    async fn refresh_cards(&mut self) -> Result<(), CoreError> {
        match self.dashboard.refresh_cards().await {
            Ok(cards) => {
                self.view.cards = cards;
                self.view.cards_updated_at = Some(Utc::now());
                self.view.cards_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "price card refresh failed, keeping previous cards");
                self.view.cards_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn refresh_chart(&mut self) -> Result<(), CoreError> {
        match self.dashboard.refresh_chart(self.selection).await {
            Ok(chart) => {
                self.view.chart = chart;
                self.view.selection = self.selection;
                self.view.chart_updated_at = Some(Utc::now());
                self.view.chart_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, selection = %self.selection, "chart refresh failed, keeping previous chart");
                self.view.chart_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Consume triggers one at a time until every sender is dropped,
    /// publishing a new view after each trigger that changed it.
    pub async fn run(
        mut self,
        mut triggers: mpsc::Receiver<Trigger>,
        views: watch::Sender<DashboardView>,
    ) {
        info!(selection = %self.selection, "refresh driver started");
        while let Some(trigger) = triggers.recv().await {
            let before = self.view.revision;
            // Failures are already logged and recorded in the view.
            let _ = self.handle(trigger).await;
            if self.view.revision != before {
                views.send_replace(self.view.clone());
            }
        }
        info!("refresh driver stopped");
    }
}

/// Send `Trigger::Tick` immediately and then every `period`.
///
/// Ticks that fall behind (slow fetches) are delayed, not bursted. The task
/// ends once the receiving driver is gone.
pub fn spawn_ticker(period: Duration, triggers: mpsc::Sender<Trigger>) -> JoinHandle<()> {
    // tokio intervals reject a zero period
    let period = period.max(Duration::from_millis(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if triggers.send(Trigger::Tick).await.is_err() {
                debug!("trigger queue closed, ticker exiting");
                break;
            }
        }
    })
}

/// Running driver plus ticker, and the ends callers need.
pub struct DriverHandle {
    /// Queue selection changes (or extra ticks) here.
    pub triggers: mpsc::Sender<Trigger>,
    /// Latest published view.
    pub views: watch::Receiver<DashboardView>,
    pub driver: JoinHandle<()>,
    pub ticker: JoinHandle<()>,
}

impl DriverHandle {
    /// Stop ticking and drop this handle's trigger sender.
    ///
    /// The driver drains its queue and exits only once every other sender
    /// (e.g. clones held by server state) has been dropped as well.
    pub fn shutdown(self) {
        self.ticker.abort();
        drop(self.triggers);
    }
}

/// Spawn `driver` on its own task with a ticker feeding it every
/// `refresh_interval`.
pub fn spawn(driver: RefreshDriver, refresh_interval: Duration) -> DriverHandle {
    let (trigger_tx, trigger_rx) = mpsc::channel(TRIGGER_QUEUE_CAPACITY);
    let (view_tx, view_rx) = watch::channel(driver.view().clone());

    let ticker = spawn_ticker(refresh_interval, trigger_tx.clone());
    let driver = tokio::spawn(driver.run(trigger_rx, view_tx));

    DriverHandle {
        triggers: trigger_tx,
        views: view_rx,
        driver,
        ticker,
    }
}
