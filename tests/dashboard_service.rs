use std::cell::RefCell;

use futures::executor::block_on;
use stock_dashboard_wasm::application::{DashboardService, RefreshSequencer};
use stock_dashboard_wasm::domain::dashboard::{ChartSpec, InputSnapshot, ThemeName};
use stock_dashboard_wasm::domain::errors::{GatewayError, GatewayResult};
use stock_dashboard_wasm::domain::market_data::{
    Interval, MarketDataGateway, MarketSnapshot, OhlcBar, Period, Price, Ticker, Timestamp,
};

/// Gateway returning a canned result and recording every request.
struct FakeGateway {
    response: fn() -> GatewayResult<MarketSnapshot>,
    requests: RefCell<Vec<(String, Period, Interval)>>,
}

impl FakeGateway {
    fn new(response: fn() -> GatewayResult<MarketSnapshot>) -> Self {
        Self { response, requests: RefCell::new(Vec::new()) }
    }
}

impl MarketDataGateway for FakeGateway {
    async fn fetch(&self, ticker: &Ticker, period: Period, interval: Interval) -> GatewayResult<MarketSnapshot> {
        self.requests.borrow_mut().push((ticker.value().to_string(), period, interval));
        (self.response)()
    }
}

fn two_bars() -> GatewayResult<MarketSnapshot> {
    let bar = |ts: i64, close: f64| {
        OhlcBar::new(Timestamp::new(ts), Price::new(close), Price::new(close + 1.0), Price::new(close - 1.0), Price::new(close))
    };
    Ok(MarketSnapshot::loaded(Some(Price::new(187.254)), vec![bar(60, 187.0), bar(120, 187.25)]))
}

fn input(ticker: &str) -> InputSnapshot {
    InputSnapshot::new(Ticker::new(ticker), ThemeName::Dark, Period::FiveDays, Interval::FifteenMinutes, 0)
}

#[test]
fn successful_fetch_yields_price_and_chart() {
    let service = DashboardService::new(FakeGateway::new(two_bars));
    let view = block_on(service.refresh(&input("AAPL")));

    assert_eq!(view.price_label, "Current Price: $187.25");
    assert!(matches!(view.chart, ChartSpec::Candlestick(ref chart) if chart.bars.len() == 2));
    assert_eq!(
        service.gateway().requests.borrow().as_slice(),
        &[("AAPL".to_string(), Period::FiveDays, Interval::FifteenMinutes)]
    );
}

#[test]
fn transport_error_is_reported_in_label() {
    let service = DashboardService::new(FakeGateway::new(|| Err(GatewayError::Transport("connection reset".into()))));
    let view = block_on(service.refresh(&input("AAPL")));

    assert_eq!(view.price_label, "Error: request failed: connection reset");
    assert!(view.chart.is_empty());
}

#[test]
fn http_status_error_is_reported_in_label() {
    let service = DashboardService::new(FakeGateway::new(|| {
        Err(GatewayError::Status { code: 502, text: "Bad Gateway".into() })
    }));
    let view = block_on(service.refresh(&input("AAPL")));
    assert_eq!(view.price_label, "Error: HTTP 502 Bad Gateway");
}

#[test]
fn unknown_symbol_is_invalid_ticker() {
    let service = DashboardService::new(FakeGateway::new(|| Ok(MarketSnapshot::empty())));
    let view = block_on(service.refresh(&input("NOPE")));
    assert_eq!(view.price_label, "Invalid Ticker: NOPE");
}

#[test]
fn blank_ticker_skips_the_gateway() {
    let service = DashboardService::new(FakeGateway::new(two_bars));
    let view = block_on(service.refresh(&input("   ")));

    assert_eq!(view.price_label, "Error: ticker symbol is empty");
    assert!(service.gateway().requests.borrow().is_empty());
}

#[test]
fn superseded_refresh_is_dropped() {
    let service = DashboardService::new(FakeGateway::new(two_bars));
    let sequencer = RefreshSequencer::new();

    let stale = sequencer.begin();
    let fresh = sequencer.begin();

    let late = block_on(service.refresh_if_current(&sequencer, stale, &input("AAPL")));
    let latest = block_on(service.refresh_if_current(&sequencer, fresh, &input("MSFT")));

    assert!(late.is_none());
    assert_eq!(latest.map(|view| view.price_label), Some("Current Price: $187.25".to_string()));
    assert_eq!(service.gateway().requests.borrow().len(), 2);
}
