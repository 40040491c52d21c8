//! Shared Dioxus components and Chart.js bridge for the wells dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js bridge script
//! - `browser`: `fetch()`-backed data source, canvas surface, DOM theme/config readers
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (toggle, chart cards, header)

pub mod browser;
pub mod components;
pub mod js_bridge;
pub mod state;
