use super::value_objects::{Price, Timestamp};
use serde::{Deserialize, Serialize};

/// Domain entity - one OHLC bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    pub timestamp: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl OhlcBar {
    pub fn new(timestamp: Timestamp, open: Price, high: Price, low: Price, close: Price) -> Self {
        Self { timestamp, open, high, low, close }
    }

    /// High is the top of the bar and low the bottom, prices positive.
    pub fn is_valid(&self) -> bool {
        self.low.value() > 0.0
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}

/// Result of one gateway round-trip.
///
/// A failed fetch never carries bars or a price. A successful fetch may
/// still have no bars: the provider knows nothing about the ticker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketSnapshot {
    last_price: Option<Price>,
    bars: Vec<OhlcBar>,
    fetch_error: Option<String>,
}

impl MarketSnapshot {
    pub fn loaded(last_price: Option<Price>, bars: Vec<OhlcBar>) -> Self {
        Self { last_price, bars, fetch_error: None }
    }

    pub fn empty() -> Self {
        Self::loaded(None, Vec::new())
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { last_price: None, bars: Vec::new(), fetch_error: Some(message.into()) }
    }

    pub fn last_price(&self) -> Option<Price> {
        self.last_price
    }

    pub fn bars(&self) -> &[OhlcBar] {
        &self.bars
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn is_failed(&self) -> bool {
        self.fetch_error.is_some()
    }
}
