use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::coin::{Coin, RangeDays};
use crate::models::history::HistorySeries;
use crate::models::price::PriceSnapshot;

/// Trait abstraction for market data sources.
///
/// The dashboard only talks to this trait, so the HTTP provider can be
/// swapped for a mock in tests, or for another API, without touching the
/// services.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Current USD price and 24h change for each of `coins`.
    /// One outbound request per call.
    async fn get_spot_prices(&self, coins: &[Coin]) -> Result<PriceSnapshot, CoreError>;

    /// Daily USD price history of `coin` over `range`.
    /// One outbound request per call.
    async fn get_history(&self, coin: Coin, range: RangeDays) -> Result<HistorySeries, CoreError>;
}
