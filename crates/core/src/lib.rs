pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use models::{
    card::PriceCard,
    chart::ChartDescriptor,
    selection::Selection,
    settings::Settings,
};
use providers::{coingecko::CoinGeckoProvider, traits::MarketDataProvider};
use services::{
    card_service::CardService, chart_service::ChartService, price_service::PriceService,
};

use errors::CoreError;

/// Main entry point for the CryptoPulse core library.
///
/// Wires a market data provider to the card and chart renderers. Each method
/// is one fetch → transform → render pipeline; scheduling them is the job of
/// `services::refresh_service::RefreshDriver`.
#[must_use]
pub struct Dashboard {
    price_service: PriceService,
    card_service: CardService,
    chart_service: ChartService,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("provider", &self.price_service.provider_name())
            .finish()
    }
}

impl Dashboard {
    /// Build a dashboard on top of any provider (real or mock).
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            price_service: PriceService::new(provider),
            card_service: CardService::new(),
            chart_service: ChartService::new(),
        }
    }

    /// Build a dashboard backed by CoinGecko as configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Arc::new(CoinGeckoProvider::from_settings(settings)))
    }

    pub fn provider_name(&self) -> &str {
        self.price_service.provider_name()
    }

    // ── Pipelines ───────────────────────────────────────────────────

    /// Price fetch → price cards, one per supported coin.
    pub async fn refresh_cards(&self) -> Result<Vec<PriceCard>, CoreError> {
        let points = self.price_service.fetch_prices().await?;
        Ok(self.card_service.render_cards(&points))
    }

    /// History fetch → chart, for `selection`.
    pub async fn refresh_chart(&self, selection: Selection) -> Result<ChartDescriptor, CoreError> {
        let series = self.price_service.fetch_history(selection).await?;
        Ok(self
            .chart_service
            .render_chart(&series, selection.coin, selection.range))
    }

    /// Placeholder chart for `selection` with no data points.
    pub fn empty_chart(&self, selection: Selection) -> ChartDescriptor {
        self.chart_service
            .empty_chart(selection.coin, selection.range)
    }
}
