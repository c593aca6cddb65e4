use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::card::PriceCard;
use super::chart::ChartDescriptor;
use super::selection::Selection;

/// Whole-page snapshot.
///
/// Every handled trigger publishes a fresh `DashboardView` that replaces
/// the previous one; subscribers never patch views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Incremented on every publish
    pub revision: u64,

    pub selection: Selection,

    /// Price cards, in coin order. Empty until the first successful fetch.
    pub cards: Vec<PriceCard>,

    /// Chart for `selection`. Empty series until the first successful fetch.
    pub chart: ChartDescriptor,

    pub cards_updated_at: Option<DateTime<Utc>>,
    pub chart_updated_at: Option<DateTime<Utc>>,

    /// Message of the last failed card refresh, cleared by the next success.
    /// `cards` keeps the previous (stale) values while this is set.
    pub cards_error: Option<String>,

    /// Message of the last failed chart refresh, cleared by the next success.
    pub chart_error: Option<String>,
}
