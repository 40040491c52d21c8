//! The two measurement dimensions a user can toggle between.

use crate::error::ParseNameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Average drilling days or average drilling cost, both per 1000m drilled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Days,
    Cost,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Days, Metric::Cost];

    /// Path prefix used by the grouped endpoints (`/api/days_per_year`).
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Days => "days",
            Metric::Cost => "cost",
        }
    }

    /// Name of the numeric series field in grouped and summary responses.
    pub fn series_field(self) -> &'static str {
        match self {
            Metric::Days => "avg_days",
            Metric::Cost => "avg_cost",
        }
    }

    /// Axis title and dataset label.
    pub fn unit_label(self) -> &'static str {
        match self {
            Metric::Days => "Days per 1000m",
            Metric::Cost => "Cost per 1000m",
        }
    }

    /// DOM id of the toggle button that selects this metric.
    pub fn button_id(self) -> &'static str {
        match self {
            Metric::Days => "days-btn",
            Metric::Cost => "cost-btn",
        }
    }

    /// Text shown on the toggle button.
    pub fn button_text(self) -> &'static str {
        match self {
            Metric::Days => "Days",
            Metric::Cost => "Cost",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "days" => Ok(Metric::Days),
            "cost" => Ok(Metric::Cost),
            _ => Err(ParseNameError {
                kind: "metric",
                value: s.to_string(),
            }),
        }
    }
}
