use crate::domain::{
    errors::{GatewayError, GatewayResult},
    logging::LogComponent,
    market_data::{Interval, MarketDataGateway, MarketSnapshot, OhlcBar, Period, Price, Ticker, Timestamp},
};
use crate::infrastructure::http::HttpUtils;
use crate::{log_debug, log_info};
use gloo_net::http::Request;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Provider code for a symbol it has no data for.
const NOT_FOUND_CODE: &str = "Not Found";

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ChartErrorBody {
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    regular_market_price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteSeries>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteSeries {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Decode a v8 chart response body.
///
/// Rows with a missing OHLC value (halted minutes) or an inconsistent
/// high/low range are dropped. The last price comes from
/// `regularMarketPrice`, else the newest close.
pub fn parse_chart_response(body: &str) -> GatewayResult<MarketSnapshot> {
    let envelope: ChartEnvelope =
        serde_json::from_str(body).map_err(|e| GatewayError::Parse(e.to_string()))?;

    if let Some(error) = envelope.chart.error {
        if error.code == NOT_FOUND_CODE {
            return Ok(MarketSnapshot::empty());
        }
        return Err(GatewayError::Lookup { code: error.code, description: error.description });
    }

    let Some(result) = envelope.chart.result.and_then(|results| results.into_iter().next()) else {
        return Ok(MarketSnapshot::empty());
    };

    let bars = match result.indicators.quote.first() {
        Some(quote) => collect_bars(&result.timestamp, quote),
        None => Vec::new(),
    };

    let last_price = result
        .meta
        .regular_market_price
        .map(Price::new)
        .or_else(|| bars.last().map(|bar| bar.close));

    Ok(MarketSnapshot::loaded(last_price, bars))
}

fn value_at(series: &[Option<f64>], i: usize) -> Option<f64> {
    series.get(i).copied().flatten()
}

fn collect_bars(timestamps: &[i64], quote: &QuoteSeries) -> Vec<OhlcBar> {
    timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            Some(OhlcBar::new(
                Timestamp::new(ts),
                Price::new(value_at(&quote.open, i)?),
                Price::new(value_at(&quote.high, i)?),
                Price::new(value_at(&quote.low, i)?),
                Price::new(value_at(&quote.close, i)?),
            ))
        })
        .filter(OhlcBar::is_valid)
        .collect()
}

/// Market data gateway backed by the Yahoo Finance chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooChartClient {
    base_url: String,
}

impl Default for YahooChartClient {
    fn default() -> Self {
        Self::new("https://query1.finance.yahoo.com")
    }
}

impl YahooChartClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn chart_url(&self, ticker: &Ticker, period: Period, interval: Interval) -> String {
        let mut params = BTreeMap::new();
        params.insert("range", period.to_string());
        params.insert("interval", interval.to_string());
        HttpUtils::build_url_with_params(
            &format!("{}/v8/finance/chart/{}", self.base_url, HttpUtils::url_encode(ticker.value())),
            &params,
        )
    }
}

impl MarketDataGateway for YahooChartClient {
    async fn fetch(&self, ticker: &Ticker, period: Period, interval: Interval) -> GatewayResult<MarketSnapshot> {
        let url = self.chart_url(ticker, period, interval);
        log_debug!(LogComponent::Infrastructure("YahooChartClient"), "GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        // The provider answers unknown symbols with a 404 and a JSON error
        // body, so the body is decoded before the status is judged.
        let snapshot = match parse_chart_response(&body) {
            Err(GatewayError::Parse(_)) if !HttpUtils::is_success_status(status) => {
                return Err(GatewayError::Status { code: status, text: status_text });
            }
            other => other?,
        };

        log_info!(
            LogComponent::Infrastructure("YahooChartClient"),
            "Loaded {} bars for {}",
            snapshot.bars().len(),
            ticker
        );
        Ok(snapshot)
    }
}
