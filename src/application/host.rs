//! Runtime host: owns the control state and fans snapshots out to
//! subscribers registered against named inputs.

use crate::application::config::{ControlMode, DashboardConfig};
use crate::domain::dashboard::{InputChange, InputId, InputSnapshot, ThemeName, resolve_interval, resolve_period};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{INTERVAL_COUNT, Interval, PERIOD_COUNT, Period, Ticker};
use crate::{log_debug, log_trace};

/// Widget state owned by the host. Counters only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    ticker: String,
    dark: bool,
    period_clicks: [u32; PERIOD_COUNT],
    interval_clicks: [u32; INTERVAL_COUNT],
    tick_count: u64,
}

impl ControlState {
    pub fn new(ticker: &str, dark: bool) -> Self {
        Self {
            ticker: ticker.to_string(),
            dark,
            period_clicks: [0; PERIOD_COUNT],
            interval_clicks: [0; INTERVAL_COUNT],
            tick_count: 0,
        }
    }

    pub fn apply(&mut self, change: &InputChange) {
        match change {
            InputChange::Ticker(text) => self.ticker = text.clone(),
            InputChange::Theme(dark) => self.dark = *dark,
            InputChange::PeriodClicked(period) => {
                let slot = &mut self.period_clicks[period.index()];
                *slot = slot.saturating_add(1);
            }
            InputChange::IntervalClicked(interval) => {
                let slot = &mut self.interval_clicks[interval.index()];
                *slot = slot.saturating_add(1);
            }
            InputChange::Tick => self.tick_count = self.tick_count.saturating_add(1),
        }
    }

    pub fn period_clicks(&self) -> &[u32] {
        &self.period_clicks
    }

    pub fn interval_clicks(&self) -> &[u32] {
        &self.interval_clicks
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Resolve the effective selection for `mode`. Timer mode ignores the
    /// buttons and uses the fixed period/interval.
    pub fn snapshot(&self, mode: ControlMode, timer_period: Period, timer_interval: Interval) -> InputSnapshot {
        let (period, interval) = match mode {
            ControlMode::Timer => (timer_period, timer_interval),
            ControlMode::Buttons => (resolve_period(&self.period_clicks), resolve_interval(&self.interval_clicks)),
        };
        InputSnapshot::new(
            Ticker::new(&self.ticker),
            ThemeName::from_dark_flag(self.dark),
            period,
            interval,
            self.tick_count,
        )
    }
}

type SnapshotHandler = Box<dyn Fn(&InputSnapshot)>;

struct Subscription {
    inputs: Vec<InputId>,
    handler: SnapshotHandler,
}

pub struct DashboardHost {
    mode: ControlMode,
    timer_period: Period,
    timer_interval: Interval,
    controls: ControlState,
    subscriptions: Vec<Subscription>,
}

impl DashboardHost {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            mode: config.control_mode,
            timer_period: config.timer_period,
            timer_interval: config.timer_interval,
            controls: ControlState::new(&config.default_ticker, config.dark_by_default),
            subscriptions: Vec::new(),
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn snapshot(&self) -> InputSnapshot {
        self.controls.snapshot(self.mode, self.timer_period, self.timer_interval)
    }

    /// Register `handler` to receive a fresh snapshot whenever any of
    /// `inputs` changes.
    pub fn subscribe<F>(&mut self, inputs: &[InputId], handler: F)
    where
        F: Fn(&InputSnapshot) + 'static,
    {
        self.subscriptions.push(Subscription { inputs: inputs.to_vec(), handler: Box::new(handler) });
    }

    /// Apply `change` and notify matching subscribers. Returns how many were
    /// notified. Changes to inputs the current mode does not watch are
    /// dropped without touching the control state.
    pub fn dispatch(&mut self, change: InputChange) -> usize {
        let id = change.id();
        if !self.mode.watches(id) {
            log_debug!(
                LogComponent::Application("Host"),
                "Ignoring {} in {} mode",
                id.as_ref(),
                self.mode.as_ref()
            );
            return 0;
        }

        self.controls.apply(&change);
        let snapshot = self.snapshot();
        log_trace!(LogComponent::Application("Host"), "Dispatching {:?}", snapshot);

        let mut notified = 0;
        for subscription in self.subscriptions.iter().filter(|s| s.inputs.contains(&id)) {
            (subscription.handler)(&snapshot);
            notified += 1;
        }
        notified
    }

    /// Deliver the current snapshot to every subscriber once, as on page load.
    pub fn publish_initial(&self) -> usize {
        let snapshot = self.snapshot();
        for subscription in &self.subscriptions {
            (subscription.handler)(&snapshot);
        }
        self.subscriptions.len()
    }
}
