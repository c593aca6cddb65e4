use std::sync::Arc;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::coin::Coin;
use crate::models::history::HistorySeries;
use crate::models::price::PricePoint;
use crate::models::selection::Selection;
use crate::providers::traits::MarketDataProvider;

/// Fetches spot prices and price history from a market data provider.
///
/// No caching: every call goes to the provider, and every result replaces
/// the previous one wholesale. Values coming back from the provider are
/// checked before they reach the renderers.
///
/// **Note on precision**: prices are `f64`. That is plenty for display with
/// two decimals; nothing here does arithmetic on them.
pub struct PriceService {
    provider: Arc<dyn MarketDataProvider>,
}

impl PriceService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Current price and 24h change for every supported coin, in coin order.
    pub async fn fetch_prices(&self) -> Result<Vec<PricePoint>, CoreError> {
        let snapshot = self.provider.get_spot_prices(&Coin::ALL).await?;

        let points = PricePoint::from_snapshot(&snapshot);
        for point in &points {
            // Validate price is finite and non-negative, change is finite
            if !point.price.is_finite() || point.price < 0.0 {
                return Err(CoreError::malformed(
                    self.provider.name(),
                    format!(
                        "Invalid price returned for {}: {} (must be finite and non-negative)",
                        point.coin, point.price
                    ),
                ));
            }
            if !point.change_24h.is_finite() {
                return Err(CoreError::malformed(
                    self.provider.name(),
                    format!("Invalid 24h change returned for {}: {}", point.coin, point.change_24h),
                ));
            }
        }
        if points.len() != Coin::ALL.len() {
            return Err(CoreError::malformed(
                self.provider.name(),
                format!("Expected {} coins, got {}", Coin::ALL.len(), points.len()),
            ));
        }

        debug!(provider = self.provider.name(), coins = points.len(), "spot prices fetched");
        Ok(points)
    }

    /// Price history for the selected coin and range.
    pub async fn fetch_history(&self, selection: Selection) -> Result<HistorySeries, CoreError> {
        let series = self
            .provider
            .get_history(selection.coin, selection.range)
            .await?;

        if series.coin != selection.coin || series.range != selection.range {
            return Err(CoreError::malformed(
                self.provider.name(),
                format!("History returned for {}/{}d, requested {selection}", series.coin, series.range),
            ));
        }
        if !series.is_strictly_increasing() {
            return Err(CoreError::malformed(
                self.provider.name(),
                format!("History for {selection} is not ordered by timestamp"),
            ));
        }
        if let Some(bad) = series.points.iter().find(|p| !p.price.is_finite() || p.price < 0.0) {
            return Err(CoreError::malformed(
                self.provider.name(),
                format!("Invalid historical price {} at {}", bad.price, bad.timestamp),
            ));
        }

        debug!(provider = self.provider.name(), %selection, points = series.len(), "history fetched");
        Ok(series)
    }
}
