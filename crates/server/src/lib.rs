//! CryptoPulse web front end.
//!
//! Serves the dashboard page, a server-sent stream of [`DashboardView`]
//! snapshots and the selection endpoint. All fetching and rendering lives
//! in `cryptopulse-core`; this crate only wires the refresh driver to HTTP.
//!
//! [`DashboardView`]: cryptopulse_core::models::view::DashboardView

pub mod error;
pub mod page;
pub mod routes;
pub mod state;
pub mod telemetry;

use std::future::Future;

use cryptopulse_core::models::settings::Settings;
use cryptopulse_core::services::refresh_service::{self, RefreshDriver};
use cryptopulse_core::Dashboard;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::ServerError;
use crate::state::AppState;

/// Bind `settings.bind_addr()` and serve until Ctrl-C.
pub async fn serve(settings: Settings) -> Result<(), ServerError> {
    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;
    info!(%addr, "dashboard listening");

    run(listener, &settings, ctrl_c()).await
}

/// Start the refresh driver and serve HTTP on `listener` until `shutdown`
/// resolves.
///
/// On shutdown, open view streams are ended first so the graceful shutdown
/// is not held up by connected pages. The driver is stopped once the
/// server has returned.
pub async fn run<F>(listener: TcpListener, settings: &Settings, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let dashboard = Dashboard::from_settings(settings);
    info!(
        provider = dashboard.provider_name(),
        api = %settings.api_base_url,
        refresh_secs = settings.refresh_interval_secs,
        selection = %settings.default_selection,
        "starting CryptoPulse"
    );

    let driver = RefreshDriver::new(dashboard, settings.default_selection);
    let handle = refresh_service::spawn(driver, settings.refresh_interval());
    let state = AppState::from_handle(&handle);
    let app = routes::router(state.clone());

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!("shutdown requested");
            state.begin_shutdown();
        })
        .await;

    handle.shutdown();
    info!("server stopped");
    served.map_err(ServerError::from)
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
