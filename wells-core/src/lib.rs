//! Platform-neutral core of the wells drilling dashboard.
//!
//! The dashboard shows four charts of average drilling days or cost per
//! 1000m, grouped by year, geological era, region and well type, plus a
//! summary subtitle. Everything in this crate compiles both natively and to
//! WASM so it can be unit-tested without a browser:
//!
//! - `metric` / `slot`: the two selectable metrics and the four chart slots
//! - `models`: typed views of the backend's JSON responses
//! - `theme` / `format`: injected presentation inputs (CSS palette, root font
//!   size, locale-aware number formatting)
//! - `chart_config`: Chart.js configuration builders, one per slot
//! - `registry`: slot → live chart ownership with a replace operation
//! - `refresh`: the fetch-and-render primitive and the four-way orchestrator
//! - `summary`: subtitle text for the summary statistics endpoint
//! - `toggle`: the metric selection state and its refresh generation
//!
//! The browser (`wells-chart-ui`) and CLI (`wells-cmd`) crates provide the
//! `StatsSource` and `ChartSurface` implementations.

pub mod chart_config;
pub mod config;
pub mod error;
pub mod format;
pub mod metric;
pub mod models;
pub mod refresh;
pub mod registry;
pub mod slot;
pub mod summary;
pub mod theme;
pub mod toggle;

#[cfg(test)]
mod testing;

pub use config::DashboardConfig;
pub use error::{DashError, Result};
pub use metric::Metric;
pub use slot::Slot;
