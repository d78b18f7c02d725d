use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Value Object - Price in quote currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Two fixed decimals, rounded from the exact binary value.
    pub fn to_fixed_2(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - Bar open time, unix seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Constructor, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_millis(&self) -> i64 {
        self.0 * 1000
    }
}

/// Value Object - Ticker symbol as typed by the user, surrounding whitespace removed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Value Object - Total span of history requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Period {
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,

    #[strum(serialize = "5d")]
    #[serde(rename = "5d")]
    FiveDays,

    #[strum(serialize = "1mo")]
    #[serde(rename = "1mo")]
    OneMonth,

    #[strum(serialize = "3mo")]
    #[serde(rename = "3mo")]
    ThreeMonths,

    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    OneYear,
}

/// Value Object - Bucket size of each bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Interval {
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    OneMinute,

    #[strum(serialize = "5m")]
    #[serde(rename = "5m")]
    FiveMinutes,

    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    FifteenMinutes,

    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    OneHour,

    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,
}

/// Number of selectable periods, in declaration order.
pub const PERIOD_COUNT: usize = 5;
/// Number of selectable intervals, in declaration order.
pub const INTERVAL_COUNT: usize = 5;

impl Period {
    pub fn options() -> Vec<Period> {
        Period::iter().collect()
    }

    pub fn index(&self) -> usize {
        Period::iter().position(|p| p == *self).unwrap_or(0)
    }
}

impl Interval {
    pub fn options() -> Vec<Interval> {
        Interval::iter().collect()
    }

    pub fn index(&self) -> usize {
        Interval::iter().position(|i| i == *self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn period_options_follow_declaration_order() {
        let labels: Vec<String> = Period::options().iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["1d", "5d", "1mo", "3mo", "1y"]);
        assert_eq!(Period::options().len(), PERIOD_COUNT);
    }

    #[test]
    fn interval_options_follow_declaration_order() {
        let options = Interval::options();
        let labels: Vec<&str> = options.iter().map(|i| i.as_ref()).collect();
        assert_eq!(labels, ["1m", "5m", "15m", "1h", "1d"]);
        assert_eq!(Interval::options().len(), INTERVAL_COUNT);
    }

    #[test]
    fn enums_parse_from_wire_strings() {
        assert_eq!(Period::from_str("3mo").unwrap(), Period::ThreeMonths);
        assert_eq!(Interval::from_str("15m").unwrap(), Interval::FifteenMinutes);
        assert!(Period::from_str("2w").is_err());
    }

    #[test]
    fn ticker_trims_but_keeps_case() {
        let ticker = Ticker::new("  msft ");
        assert_eq!(ticker.value(), "msft");
        assert!(Ticker::new("   ").is_empty());
    }

    #[test]
    fn price_formats_two_decimals() {
        assert_eq!(Price::new(123.4).to_fixed_2(), "123.40");
        assert_eq!(Price::new(1.005).to_fixed_2(), "1.00");
        assert_eq!(Price::new(2.675).to_fixed_2(), "2.67");
        assert_eq!(Price::new(0.999).to_fixed_2(), "1.00");
    }
}
