use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::coin::Coin;

/// Spot price of one coin as returned by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotQuote {
    /// Price in USD
    pub price: f64,

    /// Signed 24h change in percent (e.g. -2.345 means -2.345%)
    pub change_24h: f64,
}

/// Coin → spot quote for one fetch. Ordered by `Coin` so cards come out
/// in a stable order.
pub type PriceSnapshot = BTreeMap<Coin, SpotQuote>;

/// A single coin's price for the current tick. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub coin: Coin,
    pub price: f64,
    pub change_24h: f64,
}

impl PricePoint {
    pub fn new(coin: Coin, price: f64, change_24h: f64) -> Self {
        Self {
            coin,
            price,
            change_24h,
        }
    }

    /// Flatten a snapshot into price points, in coin order.
    pub fn from_snapshot(snapshot: &PriceSnapshot) -> Vec<PricePoint> {
        snapshot
            .iter()
            .map(|(coin, quote)| PricePoint::new(*coin, quote.price, quote.change_24h))
            .collect()
    }
}
