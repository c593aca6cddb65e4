use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::selection::Selection;

/// CoinGecko public API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Runtime settings.
///
/// All values are fixed defaults; the binary never reads a config file or
/// environment variables for these. Tests build their own `Settings` to
/// point the fetchers at a local mock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Interface the web server binds to.
    pub host: String,

    /// Port the web server listens on.
    pub port: u16,

    /// Period of the refresh timer, in seconds.
    pub refresh_interval_secs: u64,

    /// Base URL of the price API (no trailing slash).
    pub api_base_url: String,

    /// Timeout for a single outbound request, in seconds.
    pub request_timeout_secs: u64,

    /// Selection the dashboard starts with.
    pub default_selection: Selection,
}

impl Settings {
    /// "host:port" string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            refresh_interval_secs: 60,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            default_selection: Selection::default(),
        }
    }
}
