use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::coin::{Coin, RangeDays};
use crate::models::history::{HistoryPoint, HistorySeries};
use crate::models::price::{PriceSnapshot, SpotQuote};
use crate::models::settings::Settings;
use super::traits::MarketDataProvider;

const PROVIDER: &str = "CoinGecko";

/// Longest slice of an error body kept in an `Api` error message.
const MAX_ERROR_BODY: usize = 200;

/// CoinGecko API provider.
///
/// - **Free**: No API key required for the public endpoints used here.
/// - **Endpoints**: `/simple/price`, `/coins/{id}/market_chart`
/// - All prices are in USD.
///
/// CoinGecko ids are the lowercase coin names ("bitcoin"), which is exactly
/// `Coin::id`, so no symbol mapping is needed.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.api_base_url.clone(), settings.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/simple/price` URL for the given coins.
    pub fn spot_prices_url(&self, coins: &[Coin]) -> String {
        let ids: Vec<&str> = coins.iter().map(|c| c.id()).collect();
        format!(
            "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true",
            self.base_url,
            ids.join(",")
        )
    }

    /// `/coins/{id}/market_chart` URL for a daily-interval history.
    pub fn history_url(&self, coin: Coin, range: RangeDays) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}&interval=daily",
            self.base_url,
            coin.id(),
            range.days()
        )
    }

    /// GET `url` and return the body, turning non-2xx answers into `Api` errors.
    async fn get_body(&self, url: &str) -> Result<String, CoreError> {
        debug!(provider = PROVIDER, %url, "sending request");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let snippet: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("HTTP {status}: {snippet}"),
            });
        }

        debug!(provider = PROVIDER, %status, bytes = body.len(), "response received");
        Ok(body)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct SimplePriceEntry {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

#[derive(Deserialize)]
struct MarketChartResponse {
    /// `[timestamp_ms, price]` pairs
    prices: Vec<(f64, f64)>,
}

/// Parse a `/simple/price` body into a snapshot covering exactly `coins`.
///
/// Every requested coin must be present with both `usd` and
/// `usd_24h_change`; anything else is a `MalformedResponse`.
pub fn parse_spot_prices(body: &str, coins: &[Coin]) -> Result<PriceSnapshot, CoreError> {
    let entries: HashMap<String, SimplePriceEntry> = serde_json::from_str(body)
        .map_err(|e| CoreError::malformed(PROVIDER, format!("Failed to parse spot prices: {e}")))?;

    let mut snapshot = PriceSnapshot::new();
    for coin in coins {
        let entry = entries
            .get(coin.id())
            .ok_or_else(|| CoreError::malformed(PROVIDER, format!("No price data for {coin}")))?;
        let price = entry
            .usd
            .ok_or_else(|| CoreError::malformed(PROVIDER, format!("Missing `usd` for {coin}")))?;
        let change_24h = entry.usd_24h_change.ok_or_else(|| {
            CoreError::malformed(PROVIDER, format!("Missing `usd_24h_change` for {coin}"))
        })?;
        snapshot.insert(*coin, SpotQuote { price, change_24h });
    }

    Ok(snapshot)
}

/// Parse a `/coins/{id}/market_chart` body into a history series.
pub fn parse_market_chart(
    body: &str,
    coin: Coin,
    range: RangeDays,
) -> Result<HistorySeries, CoreError> {
    let resp: MarketChartResponse = serde_json::from_str(body).map_err(|e| {
        CoreError::malformed(PROVIDER, format!("Failed to parse history for {coin}: {e}"))
    })?;

    let points = resp
        .prices
        .into_iter()
        .map(|(ts_ms, price)| {
            let timestamp = if ts_ms.is_finite() {
                DateTime::from_timestamp_millis(ts_ms as i64)
            } else {
                None
            }
            .ok_or_else(|| {
                CoreError::malformed(PROVIDER, format!("Invalid timestamp {ts_ms} for {coin}"))
            })?;
            Ok(HistoryPoint { timestamp, price })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(HistorySeries::from_unsorted(coin, range, points))
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn get_spot_prices(&self, coins: &[Coin]) -> Result<PriceSnapshot, CoreError> {
        let url = self.spot_prices_url(coins);
        let body = self.get_body(&url).await?;
        parse_spot_prices(&body, coins)
    }

    async fn get_history(&self, coin: Coin, range: RangeDays) -> Result<HistorySeries, CoreError> {
        let url = self.history_url(coin, range);
        let body = self.get_body(&url).await?;
        parse_market_chart(&body, coin, range)
    }
}
