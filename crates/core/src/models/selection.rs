use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use super::coin::{Coin, RangeDays};

/// The user's current chart selection.
///
/// An immutable value: a selection change produces a new `Selection` that
/// replaces the old one, and each chart refresh is handed the selection it
/// should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub coin: Coin,
    #[serde(rename = "days")]
    pub range: RangeDays,
}

impl Selection {
    pub fn new(coin: Coin, range: RangeDays) -> Self {
        Self { coin, range }
    }

    /// Parse a selection from the raw dropdown values ("ethereum", "30").
    pub fn parse(coin: &str, days: &str) -> Result<Self, CoreError> {
        Ok(Self {
            coin: coin.parse()?,
            range: days.parse()?,
        })
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            coin: Coin::Bitcoin,
            range: RangeDays::Seven,
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}d", self.coin, self.range)
    }
}
