//! Typed wrappers around the Chart.js bridge.
//!
//! `assets/js/chart-bridge.js` defines `window.wellsDrawChart`, which parses a
//! JSON chart configuration, installs the tooltip callback and constructs the
//! Chart.js instance. The script is embedded at compile time and evaluated once
//! at startup; Chart.js itself is loaded by the page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use wells_core::chart_config::ChartConfig;
use wells_core::registry::ChartHandle;
use wells_core::DashError;

static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js chart.
    pub type JsChart;

    #[wasm_bindgen(catch, js_name = wellsDrawChart)]
    fn wells_draw_chart(canvas: &HtmlCanvasElement, config_json: &str) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

impl ChartHandle for JsChart {
    fn dispose(self) {
        self.destroy();
    }
}

/// Evaluate the bridge script. Call once before the first refresh.
pub fn load_chart_scripts() {
    if let Err(e) = js_sys::eval(CHART_BRIDGE_JS) {
        web_sys::console::warn_2(&"[Wells] chart bridge failed to load:".into(), &e);
    }
}

/// Draw `config` on `canvas`. The canvas must not hold a chart already.
pub fn draw_chart(
    canvas: &HtmlCanvasElement,
    config: &ChartConfig,
) -> Result<JsChart, DashError> {
    let chart_error = |reason: String| DashError::Chart {
        canvas: canvas.id(),
        reason,
    };
    let config_json = config.to_json().map_err(|e| chart_error(e.to_string()))?;
    wells_draw_chart(canvas, &config_json).map_err(|e| chart_error(describe(&e)))
}

/// Best-effort message for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        text
    } else if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        format!("{:?}", value)
    }
}
