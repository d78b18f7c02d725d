use crate::domain::dashboard::InputId;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogLevel;
use crate::domain::market_data::{Interval, Period};
use serde::Deserialize;
use strum::{AsRefStr, EnumString};

/// Which source drives refreshes besides ticker and theme edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    /// Fixed period/interval, refreshed by a periodic tick.
    Timer,
    /// Period/interval picked with button groups, no timer.
    #[default]
    Buttons,
}

impl ControlMode {
    /// Inputs that trigger a price/chart refresh in this mode.
    pub fn view_inputs(&self) -> &'static [InputId] {
        match self {
            ControlMode::Timer => &[InputId::Ticker, InputId::Theme, InputId::Tick],
            ControlMode::Buttons => &[
                InputId::Ticker,
                InputId::Theme,
                InputId::PeriodButtons,
                InputId::IntervalButtons,
            ],
        }
    }

    /// Inputs that trigger a page restyle.
    pub fn style_inputs(&self) -> &'static [InputId] {
        &[InputId::Theme]
    }

    pub fn watches(&self, id: InputId) -> bool {
        self.view_inputs().contains(&id) || self.style_inputs().contains(&id)
    }
}

/// Startup configuration, handed to the UI at mount time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub control_mode: ControlMode,
    pub default_ticker: String,
    pub dark_by_default: bool,
    pub refresh_interval_ms: u32,
    /// Chart API origin. Browsers block direct calls to Yahoo (no CORS
    /// headers), so pages serve it through a same-origin proxy such as `/yahoo`.
    pub quote_base_url: String,
    pub timer_period: Period,
    pub timer_interval: Interval,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            control_mode: ControlMode::Buttons,
            default_ticker: "AAPL".to_string(),
            dark_by_default: false,
            refresh_interval_ms: 5_000,
            quote_base_url: "https://query1.finance.yahoo.com".to_string(),
            timer_period: Period::OneDay,
            timer_interval: Interval::OneMinute,
            log_level: LogLevel::Debug,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let config: DashboardConfig =
            serde_json::from_str(raw).map_err(|e| AppError::Config(format!("invalid dashboard config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.refresh_interval_ms == 0 {
            return Err(AppError::Config("refresh_interval_ms must be positive".to_string()));
        }
        if self.quote_base_url.trim().is_empty() {
            return Err(AppError::Config("quote_base_url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn with_control_mode(mut self, mode: ControlMode) -> Self {
        self.control_mode = mode;
        self
    }
}
