use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// A supported cryptocurrency.
///
/// The set is closed: the dashboard tracks exactly these coins. The wire id
/// (`bitcoin`, `ethereum`, `dogecoin`) is what the price API and the browser
/// page use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Bitcoin,
    Ethereum,
    Dogecoin,
}

impl Coin {
    /// Every supported coin, in display order.
    pub const ALL: [Coin; 3] = [Coin::Bitcoin, Coin::Ethereum, Coin::Dogecoin];

    /// API identifier, e.g. "bitcoin".
    pub fn id(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "bitcoin",
            Coin::Ethereum => "ethereum",
            Coin::Dogecoin => "dogecoin",
        }
    }

    /// Capitalized name used in card titles and chart titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "Bitcoin",
            Coin::Ethereum => "Ethereum",
            Coin::Dogecoin => "Dogecoin",
        }
    }

    /// Ticker symbol (BTC, ETH, DOGE).
    pub fn symbol(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "BTC",
            Coin::Ethereum => "ETH",
            Coin::Dogecoin => "DOGE",
        }
    }

    /// Dropdown label, e.g. "Bitcoin (BTC)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name(), self.symbol())
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Coin {
    type Err = CoreError;

    /// Parses a wire id. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Coin::ALL
            .into_iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| CoreError::UnsupportedCoin(s.to_string()))
    }
}

/// Historical window length for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RangeDays {
    One,
    Seven,
    Thirty,
}

impl RangeDays {
    pub const ALL: [RangeDays; 3] = [RangeDays::One, RangeDays::Seven, RangeDays::Thirty];

    pub fn days(&self) -> u32 {
        match self {
            RangeDays::One => 1,
            RangeDays::Seven => 7,
            RangeDays::Thirty => 30,
        }
    }

    /// Dropdown label, e.g. "7 Days".
    pub fn label(&self) -> String {
        match self {
            RangeDays::One => "1 Day".to_string(),
            other => format!("{} Days", other.days()),
        }
    }

    /// Number of points a daily-interval history request yields for this
    /// window: one per day boundary plus the latest price.
    pub fn expected_daily_points(&self) -> usize {
        self.days() as usize + 1
    }
}

impl std::fmt::Display for RangeDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl TryFrom<u32> for RangeDays {
    type Error = CoreError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            1 => Ok(RangeDays::One),
            7 => Ok(RangeDays::Seven),
            30 => Ok(RangeDays::Thirty),
            other => Err(CoreError::UnsupportedRange(other.to_string())),
        }
    }
}

impl From<RangeDays> for u32 {
    fn from(range: RangeDays) -> Self {
        range.days()
    }
}

impl FromStr for RangeDays {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: u32 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::UnsupportedRange(s.to_string()))?;
        RangeDays::try_from(days)
    }
}
