//! Reusable Dioxus RSX components for the wells dashboard.

mod chart_card;
mod dashboard_header;
mod metric_toggle;

pub use chart_card::ChartCard;
pub use dashboard_header::{DashboardHeader, SUBTITLE_ID};
pub use metric_toggle::MetricToggle;
