use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coin::{Coin, RangeDays};

/// A single (timestamp → price) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Price history of one coin over one range.
///
/// Points are strictly increasing by timestamp. A series is rebuilt from
/// scratch on every fetch; nothing is cached or merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySeries {
    pub coin: Coin,
    pub range: RangeDays,
    pub points: Vec<HistoryPoint>,
}

impl HistorySeries {
    /// Build a series from unordered samples. Points are sorted by
    /// timestamp; for duplicate timestamps the last sample wins.
    pub fn from_unsorted(coin: Coin, range: RangeDays, mut points: Vec<HistoryPoint>) -> Self {
        // Stable sort keeps input order among equal timestamps, so the
        // reverse-then-dedup below keeps the last one.
        points.sort_by_key(|p| p.timestamp);
        points.reverse();
        points.dedup_by_key(|p| p.timestamp);
        points.reverse();
        Self { coin, range, points }
    }

    pub fn empty(coin: Coin, range: RangeDays) -> Self {
        Self {
            coin,
            range,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when every timestamp is strictly greater than the previous one.
    pub fn is_strictly_increasing(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[0].timestamp < w[1].timestamp)
    }
}
