use crate::domain::dashboard::theme::ThemeName;
use crate::domain::market_data::{Interval, Period, Ticker};
use strum::{AsRefStr, EnumIter};

/// Full view of the controls at the moment a refresh was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSnapshot {
    pub ticker: Ticker,
    pub theme: ThemeName,
    pub period: Period,
    pub interval: Interval,
    pub tick_count: u64,
}

impl InputSnapshot {
    pub fn new(ticker: Ticker, theme: ThemeName, period: Period, interval: Interval, tick_count: u64) -> Self {
        Self { ticker, theme, period, interval, tick_count }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}

/// Identifier of a watchable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum InputId {
    Ticker,
    Theme,
    PeriodButtons,
    IntervalButtons,
    Tick,
}

/// One user or timer event, as emitted by the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChange {
    Ticker(String),
    Theme(bool),
    PeriodClicked(Period),
    IntervalClicked(Interval),
    Tick,
}

impl InputChange {
    pub fn id(&self) -> InputId {
        match self {
            InputChange::Ticker(_) => InputId::Ticker,
            InputChange::Theme(_) => InputId::Theme,
            InputChange::PeriodClicked(_) => InputId::PeriodButtons,
            InputChange::IntervalClicked(_) => InputId::IntervalButtons,
            InputChange::Tick => InputId::Tick,
        }
    }
}
