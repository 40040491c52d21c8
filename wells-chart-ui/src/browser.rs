//! Browser implementations of the dashboard's data source and chart surface,
//! plus the page-level inputs (theme, configuration) read from the DOM.

use crate::js_bridge::{self, JsChart};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, Response};
use wells_core::chart_config::ChartConfig;
use wells_core::models::decode_response;
use wells_core::refresh::{ChartSurface, StatsSource};
use wells_core::theme::{parse_font_size, Theme};
use wells_core::{DashError, DashboardConfig, Result};

/// Attribute on the mount element overriding the API base URL.
pub const API_BASE_ATTR: &str = "data-api-base";
/// Attribute on the mount element overriding the number-format locale.
pub const LOCALE_ATTR: &str = "data-locale";

/// `fetch()` against the page's backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSource;

impl StatsSource for BrowserSource {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value> {
        let request_error = |e: JsValue| DashError::Request {
            endpoint: endpoint.to_string(),
            reason: js_bridge::describe(&e),
        };

        let window = web_sys::window().ok_or_else(|| DashError::Request {
            endpoint: endpoint.to_string(),
            reason: "no window".to_string(),
        })?;
        let response: Response = JsFuture::from(window.fetch_with_str(endpoint))
            .await
            .map_err(request_error)?
            .dyn_into()
            .map_err(request_error)?;
        let text = JsFuture::from(response.text().map_err(request_error)?)
            .await
            .map_err(request_error)?;

        decode_response(endpoint, response.status(), &text.as_string().unwrap_or_default())
    }
}

/// Canvases in the current document, drawn on through Chart.js.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSurface;

impl ChartSurface for BrowserSurface {
    type Canvas = HtmlCanvasElement;
    type Handle = JsChart;

    fn canvas(&self, canvas_id: &str) -> Result<HtmlCanvasElement> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| DashError::MissingCanvas(canvas_id.to_string()))
    }

    fn draw(&self, canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<JsChart> {
        js_bridge::draw_chart(canvas, config)
    }
}

/// Read the seven `--color-*` custom properties and the root font size.
///
/// Called at the start of every refresh so charts follow the page's current
/// styling. Anything unreadable falls back to the built-in theme.
pub fn read_theme() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::default();
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return Theme::default();
    };
    let style = match window.get_computed_style(&root) {
        Ok(Some(style)) => style,
        _ => return Theme::default(),
    };

    let font_px = style
        .get_property_value("font-size")
        .ok()
        .and_then(|v| parse_font_size(&v));
    Theme::from_lookup(|name| style.get_property_value(name).ok(), font_px)
}

/// Build the dashboard configuration from `data-*` attributes on the mount element.
pub fn read_config(root_id: &str) -> DashboardConfig {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(root_id));
    let attr = |name: &str| root.as_ref().and_then(|el| el.get_attribute(name));
    DashboardConfig::from_overrides(attr(API_BASE_ATTR), attr(LOCALE_ATTR))
}
