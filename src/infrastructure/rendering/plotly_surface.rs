use crate::domain::{
    dashboard::ChartSpec,
    errors::{AppError, AppResult},
    logging::LogComponent,
};
use crate::log_debug;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `Plotly.react(root, data, layout)`; throws if plotly.js is not loaded.
    #[wasm_bindgen(js_namespace = Plotly, js_name = react, catch)]
    fn plotly_react(root: &str, data: &JsValue, layout: &JsValue) -> Result<JsValue, JsValue>;
}

/// Drawing target for chart specs: the plotly.js root element with `element_id`.
#[derive(Debug, Clone)]
pub struct PlotlySurface {
    element_id: String,
}

impl PlotlySurface {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self { element_id: element_id.into() }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn draw(&self, chart: &ChartSpec) -> AppResult<()> {
        let figure = chart.to_plotly_figure();
        let data = to_js(&figure["data"])?;
        let layout = to_js(&figure["layout"])?;

        plotly_react(&self.element_id, &data, &layout)
            .map_err(|e| AppError::Presentation(format!("Plotly.react failed: {:?}", e)))?;

        log_debug!(
            LogComponent::Infrastructure("PlotlySurface"),
            "Drew {} chart into #{}",
            if chart.is_empty() { "empty" } else { "candlestick" },
            self.element_id
        );
        Ok(())
    }
}

fn to_js(value: &Value) -> AppResult<JsValue> {
    js_sys::JSON::parse(&value.to_string())
        .map_err(|e| AppError::Presentation(format!("figure is not valid JSON: {:?}", e)))
}
