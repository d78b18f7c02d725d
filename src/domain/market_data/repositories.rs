use crate::domain::errors::GatewayResult;
use crate::domain::market_data::{Interval, MarketSnapshot, Period, Ticker};

/// Source of quotes and bar history.
///
/// An unknown ticker is reported as `Ok` with no bars; `Err` is reserved for
/// transport, status and decoding failures.
#[allow(async_fn_in_trait)]
pub trait MarketDataGateway {
    async fn fetch(&self, ticker: &Ticker, period: Period, interval: Interval) -> GatewayResult<MarketSnapshot>;
}
