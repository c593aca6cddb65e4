use serde::{Deserialize, Serialize};

use super::coin::Coin;

/// Color of the 24h change line on a price card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    /// Change ≥ 0
    Affirmative,
    /// Change < 0
    Warning,
}

impl CardColor {
    pub fn css(&self) -> &'static str {
        match self {
            CardColor::Affirmative => "lime",
            CardColor::Warning => "red",
        }
    }
}

/// A rendered price card: everything the page needs to draw one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCard {
    pub coin: Coin,

    /// Capitalized coin name, e.g. "Bitcoin"
    pub title: String,

    /// e.g. "$43,123.40"
    pub price_text: String,

    /// e.g. "-2.35% (24h)"
    pub change_text: String,

    pub color: CardColor,

    /// CSS color for `color`, so the page does not need its own mapping
    pub css_color: String,
}
