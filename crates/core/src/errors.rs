use thiserror::Error;

/// Unified error type for the entire cryptopulse-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Malformed response ({provider}): {message}")]
    MalformedResponse {
        provider: String,
        message: String,
    },

    // ── Validation ──────────────────────────────────────────────────
    #[error("Unsupported coin: {0}")]
    UnsupportedCoin(String),

    #[error("Unsupported range: {0} (expected 1, 7 or 30 days)")]
    UnsupportedRange(String),

    // ── Encoding ────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Shorthand for a `MalformedResponse` from a named provider.
    pub fn malformed(provider: &str, message: impl Into<String>) -> Self {
        CoreError::MalformedResponse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full request URL; keep logs and views
        // free of query strings.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
