//! The view-state reducer: what the dashboard shows for a given input
//! snapshot and market snapshot.

use crate::domain::dashboard::inputs::InputSnapshot;
use crate::domain::dashboard::theme::{PageStyle, ThemeName, page_style_for, palette_for};
use crate::domain::market_data::{MarketSnapshot, OhlcBar};
use serde::Serialize;
use serde_json::{Value, json};

pub const UP_COLOR_DARK: &str = "lime";
pub const UP_COLOR_LIGHT: &str = "green";
pub const DOWN_COLOR: &str = "red";
pub const GRID_COLOR: &str = "gray";
pub const X_AXIS_TITLE: &str = "Time";
pub const Y_AXIS_TITLE: &str = "Price ($)";

/// Label shown before the first refresh completes.
pub const LOADING_LABEL: &str = "Current Price: (Loading...)";
pub const EMPTY_TICKER_MESSAGE: &str = "ticker symbol is empty";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlestickChart {
    pub title: String,
    pub bars: Vec<OhlcBar>,
    pub increasing_color: &'static str,
    pub decreasing_color: &'static str,
    pub background: &'static str,
    pub font_color: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub grid_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartSpec {
    /// Cleared chart, no traces and default layout.
    Empty,
    Candlestick(CandlestickChart),
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        matches!(self, ChartSpec::Empty)
    }

    /// Plotly figure JSON, `{"data": [...], "layout": {...}}`.
    pub fn to_plotly_figure(&self) -> Value {
        match self {
            ChartSpec::Empty => json!({ "data": [], "layout": {} }),
            ChartSpec::Candlestick(chart) => {
                let x: Vec<i64> = chart.bars.iter().map(|b| b.timestamp.as_millis()).collect();
                let open: Vec<f64> = chart.bars.iter().map(|b| b.open.value()).collect();
                let high: Vec<f64> = chart.bars.iter().map(|b| b.high.value()).collect();
                let low: Vec<f64> = chart.bars.iter().map(|b| b.low.value()).collect();
                let close: Vec<f64> = chart.bars.iter().map(|b| b.close.value()).collect();
                json!({
                    "data": [{
                        "type": "candlestick",
                        "x": x,
                        "open": open,
                        "high": high,
                        "low": low,
                        "close": close,
                        "increasing": { "line": { "color": chart.increasing_color } },
                        "decreasing": { "line": { "color": chart.decreasing_color } },
                    }],
                    "layout": {
                        "title": { "text": chart.title },
                        "xaxis": { "title": { "text": chart.x_axis_title }, "gridcolor": chart.grid_color, "type": "date" },
                        "yaxis": { "title": { "text": chart.y_axis_title }, "gridcolor": chart.grid_color },
                        "plot_bgcolor": chart.background,
                        "paper_bgcolor": chart.background,
                        "font": { "color": chart.font_color },
                    },
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub price_label: String,
    pub chart: ChartSpec,
    pub page_style: PageStyle,
}

impl ViewState {
    /// Placeholder shown while the first fetch is outstanding.
    pub fn loading(theme: ThemeName) -> Self {
        Self {
            price_label: LOADING_LABEL.to_string(),
            chart: ChartSpec::Empty,
            page_style: page_style_for(theme),
        }
    }
}

/// Compute the next view. Never fails; every failure becomes a label.
pub fn reduce(input: &InputSnapshot, market: &MarketSnapshot) -> ViewState {
    let page_style = page_style_for(input.theme);
    let ticker = input.ticker.value();

    let (price_label, chart) = if input.ticker.is_empty() {
        (error_label(EMPTY_TICKER_MESSAGE), ChartSpec::Empty)
    } else if let Some(message) = market.fetch_error() {
        (error_label(message), ChartSpec::Empty)
    } else if market.bars().is_empty() {
        (format!("Invalid Ticker: {}", ticker), ChartSpec::Empty)
    } else if let Some(price) = market.last_price() {
        (
            format!("Current Price: ${}", price.to_fixed_2()),
            ChartSpec::Candlestick(candlestick(input, market.bars())),
        )
    } else {
        (error_label(&format!("no last price for {}", ticker)), ChartSpec::Empty)
    };

    ViewState { price_label, chart, page_style }
}

fn error_label(message: &str) -> String {
    format!("Error: {}", message)
}

fn candlestick(input: &InputSnapshot, bars: &[OhlcBar]) -> CandlestickChart {
    let palette = palette_for(input.theme);
    CandlestickChart {
        title: format!("{} Stock Price", input.ticker.value()),
        bars: bars.to_vec(),
        increasing_color: if input.is_dark() { UP_COLOR_DARK } else { UP_COLOR_LIGHT },
        decreasing_color: DOWN_COLOR,
        background: palette.graph_background,
        font_color: palette.graph_text,
        x_axis_title: X_AXIS_TITLE,
        y_axis_title: Y_AXIS_TITLE,
        grid_color: GRID_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{Interval, Period, Price, Ticker, Timestamp};

    fn snapshot(ticker: &str) -> InputSnapshot {
        InputSnapshot::new(Ticker::new(ticker), ThemeName::Light, Period::OneDay, Interval::OneMinute, 0)
    }

    #[test]
    fn missing_price_with_bars_is_an_error() {
        let bar = OhlcBar::new(Timestamp::new(60), Price::new(1.0), Price::new(2.0), Price::new(0.5), Price::new(1.5));
        let view = reduce(&snapshot("IBM"), &MarketSnapshot::loaded(None, vec![bar]));
        assert_eq!(view.price_label, "Error: no last price for IBM");
        assert!(view.chart.is_empty());
    }

    #[test]
    fn empty_ticker_wins_over_market_data() {
        let view = reduce(&snapshot("  "), &MarketSnapshot::empty());
        assert_eq!(view.price_label, "Error: ticker symbol is empty");
    }

    #[test]
    fn empty_chart_is_a_bare_figure() {
        assert_eq!(ChartSpec::Empty.to_plotly_figure(), json!({ "data": [], "layout": {} }));
    }
}
