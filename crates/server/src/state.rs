use std::sync::Arc;

use cryptopulse_core::models::selection::Selection;
use cryptopulse_core::models::view::DashboardView;
use cryptopulse_core::services::refresh_service::{DriverHandle, Trigger};
use tokio::sync::{mpsc, watch};

use crate::error::ApiError;

/// Shared handler state: the write end of the trigger queue, the read
/// end of the view channel and the server-wide shutdown flag. Cloning is
/// cheap.
#[derive(Clone)]
pub struct AppState {
    triggers: mpsc::Sender<Trigger>,
    views: watch::Receiver<DashboardView>,
    shutdown: Arc<watch::Sender<bool>>,
}

impl AppState {
    pub fn new(triggers: mpsc::Sender<Trigger>, views: watch::Receiver<DashboardView>) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            triggers,
            views,
            shutdown: Arc::new(shutdown),
        }
    }

    pub fn from_handle(handle: &DriverHandle) -> Self {
        Self::new(handle.triggers.clone(), handle.views.clone())
    }

    /// Latest published view.
    pub fn current_view(&self) -> DashboardView {
        self.views.borrow().clone()
    }

    /// A fresh receiver for streaming view updates.
    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.views.clone()
    }

    /// Queue a selection change for the driver.
    pub async fn request_selection(&self, selection: Selection) -> Result<(), ApiError> {
        self.triggers
            .send(Trigger::SelectionChanged(selection))
            .await
            .map_err(|_| ApiError::DriverStopped)
    }

    /// Tell long-lived responses (the view stream) to finish. Idempotent.
    pub fn begin_shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Receiver of the shutdown flag, `true` once
    /// [`begin_shutdown`](Self::begin_shutdown) has been called.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown.subscribe()
    }
}

/// Wait until `shutdown` flips to `true`.
pub(crate) async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    // The sender lives in every AppState clone, so an error here means the
    // server is gone anyway.
    let _ = shutdown.wait_for(|stop| *stop).await;
}
