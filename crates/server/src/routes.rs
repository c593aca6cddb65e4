use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use futures_util::stream::{self, Stream};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use cryptopulse_core::models::coin::{Coin, RangeDays};
use cryptopulse_core::models::selection::Selection;
use cryptopulse_core::models::view::DashboardView;

use crate::error::ApiError;
use crate::page::render_page;
use crate::state::{shutdown_requested, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/view", get(current_view))
        .route("/api/events", get(view_events))
        .route("/api/options", get(options))
        .route("/api/selection", post(change_selection))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.current_view().selection))
}

async fn health() -> &'static str {
    "ok"
}

async fn current_view(State(state): State<AppState>) -> Json<DashboardView> {
    Json(state.current_view())
}

/// Stream every published view as a `view` event, starting with the
/// current one so a fresh page can render straight away. The stream ends
/// when the server shuts down or the driver goes away.
async fn view_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    debug!("view stream subscriber connected");
    let initial = (state.subscribe(), state.shutdown_receiver(), true);
    let events = stream::unfold(initial, |(mut views, mut shutdown, first)| async move {
        if *shutdown.borrow() {
            debug!("server shutting down, ending view stream");
            return None;
        }
        if !first {
            tokio::select! {
                changed = views.changed() => {
                    if changed.is_err() {
                        debug!("view channel closed, ending view stream");
                        return None;
                    }
                }
                _ = shutdown_requested(&mut shutdown) => {
                    debug!("server shutting down, ending view stream");
                    return None;
                }
            }
        }
        let view = views.borrow_and_update().clone();
        let event = Event::default().event("view").json_data(&view);
        Some((event, (views, shutdown, false)))
    });
    Sse::new(events).keep_alive(KeepAlive::default())
}

#[derive(Debug, Serialize)]
pub struct OptionEntry<T> {
    pub value: T,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub coins: Vec<OptionEntry<Coin>>,
    pub ranges: Vec<OptionEntry<RangeDays>>,
    pub selection: Selection,
}

async fn options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        coins: Coin::ALL
            .iter()
            .map(|&coin| OptionEntry { value: coin, label: coin.label() })
            .collect(),
        ranges: RangeDays::ALL
            .iter()
            .map(|&range| OptionEntry { value: range, label: range.label() })
            .collect(),
        selection: state.current_view().selection,
    })
}

/// Dropdown values as posted by the page. `days` may arrive as a number
/// or as the raw option string.
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub coin: String,
    pub days: DaysValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DaysValue {
    Number(u32),
    Text(String),
}

impl DaysValue {
    fn as_text(&self) -> String {
        match self {
            DaysValue::Number(n) => n.to_string(),
            DaysValue::Text(s) => s.clone(),
        }
    }
}

async fn change_selection(
    State(state): State<AppState>,
    body: Result<Json<SelectionRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let selection = Selection::parse(&request.coin, &request.days.as_text())?;

    state.request_selection(selection).await?;
    info!(%selection, "selection change queued");
    Ok(StatusCode::ACCEPTED)
}
