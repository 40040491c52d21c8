//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::js_bridge::JsChart;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wells_core::registry::ChartRegistry;
use wells_core::toggle::ToggleState;
use wells_core::{DashboardConfig, Metric};

/// Live Chart.js charts by slot, shared between the refresh tasks.
pub type SharedRegistry = Rc<RefCell<ChartRegistry<JsChart>>>;

pub fn new_registry() -> SharedRegistry {
    Rc::new(RefCell::new(ChartRegistry::new()))
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active metric and refresh generation. Written only by the toggle buttons.
    pub toggle: Signal<ToggleState>,
    /// Summary subtitle text (None until the first summary arrives)
    pub subtitle: Signal<Option<String>>,
    /// Backend location and number-format locale
    pub config: Signal<DashboardConfig>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            toggle: Signal::new(ToggleState::new(Metric::Days)),
            subtitle: Signal::new(None),
            config: Signal::new(config),
        }
    }
}
