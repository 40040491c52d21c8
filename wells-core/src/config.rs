//! Dashboard configuration: where the backend lives and which locale to format for.

use crate::format::NumberFormat;
use crate::metric::Metric;
use crate::slot::Slot;

/// Default locale tag when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for every endpoint. Empty means same origin as the page.
    api_base: String,
    locale: String,
}

impl DashboardConfig {
    pub fn new(api_base: impl Into<String>, locale: impl Into<String>) -> Self {
        let api_base = api_base.into().trim().trim_end_matches('/').to_string();
        let locale = locale.into().trim().to_string();
        Self {
            api_base,
            locale: if locale.is_empty() {
                DEFAULT_LOCALE.to_string()
            } else {
                locale
            },
        }
    }

    /// Build from optional overrides (e.g. `data-*` attributes on the mount element).
    pub fn from_overrides(api_base: Option<String>, locale: Option<String>) -> Self {
        Self::new(
            api_base.unwrap_or_default(),
            locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        )
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn numbers(&self) -> NumberFormat {
        NumberFormat::for_tag(&self.locale)
    }

    /// `{api_base}/api/{metric}{suffix}`, e.g. `/api/days_per_year`.
    pub fn grouped_endpoint(&self, metric: Metric, slot: Slot) -> String {
        format!("{}/api/{}{}", self.api_base, metric.as_str(), slot.suffix())
    }

    pub fn summary_endpoint(&self) -> String {
        format!("{}/api/summary_stats", self.api_base)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new("", DEFAULT_LOCALE)
    }
}
