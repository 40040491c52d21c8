//! The four fixed chart placements on the dashboard.

use crate::error::ParseNameError;
use std::fmt;
use std::str::FromStr;

/// A chart placement. Each slot owns one canvas and one grouped endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Year,
    Era,
    Region,
    WellType,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Year, Slot::Era, Slot::Region, Slot::WellType];

    /// Endpoint suffix appended to the metric prefix.
    pub fn suffix(self) -> &'static str {
        match self {
            Slot::Year => "_per_year",
            Slot::Era => "_per_era",
            Slot::Region => "_per_region",
            Slot::WellType => "_per_well_type",
        }
    }

    /// Name of the labels field in the grouped response.
    pub fn label_field(self) -> &'static str {
        match self {
            Slot::Year => "Year",
            Slot::Era => "Era",
            Slot::Region => "Region",
            Slot::WellType => "Well_Type",
        }
    }

    /// DOM id of the canvas this slot draws into.
    pub fn canvas_id(self) -> &'static str {
        match self {
            Slot::Year => "wellcountsChart",
            Slot::Era => "eracountsChart",
            Slot::Region => "regioncountsChart",
            Slot::WellType => "welltypecountsChart",
        }
    }

    /// Heading shown above the chart.
    pub fn title(self) -> &'static str {
        match self {
            Slot::Year => "Efficiency over time",
            Slot::Era => "Efficiency by era",
            Slot::Region => "Efficiency by region",
            Slot::WellType => "Efficiency by well type",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Year => "year",
            Slot::Era => "era",
            Slot::Region => "region",
            Slot::WellType => "well_type",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "year" => Ok(Slot::Year),
            "era" => Ok(Slot::Era),
            "region" => Ok(Slot::Region),
            "well_type" | "welltype" => Ok(Slot::WellType),
            _ => Err(ParseNameError {
                kind: "slot",
                value: s.to_string(),
            }),
        }
    }
}
