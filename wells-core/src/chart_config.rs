//! Chart.js configuration builders, one per slot.
//!
//! The structs serialize to the object Chart.js expects:
//!
//! ```json
//! {
//!   "type": "bar",
//!   "data": { "labels": ["a", "b"], "datasets": [{ "data": [20, 10] }] },
//!   "options": { "responsive": true }
//! }
//! ```
//!
//! Datasets also carry `tooltipLabels`, pre-formatted in the metric's unit;
//! the JS bridge installs a tooltip callback that reads them.

use crate::format::NumberFormat;
use crate::metric::Metric;
use crate::models::{GroupedAverages, Label};
use crate::slot::Slot;
use crate::theme::{with_alpha, Theme, BAR_FILL_ALPHA, LINE_FILL_ALPHA};
use serde::Serialize;

/// Axis title font size, in rem.
const AXIS_TITLE_REM: f64 = 0.8;

/// Everything the builders need besides the data and metric.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Presentation {
    pub theme: Theme,
    pub numbers: NumberFormat,
}

impl Presentation {
    pub fn new(theme: Theme, numbers: NumberFormat) -> Self {
        Self { theme, numbers }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
}

/// One color for the whole dataset or one per bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Single(String),
    PerBar(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub background_color: Paint,
    pub border_color: Paint,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    pub tooltip_labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<Label>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    /// `"y"` turns a bar chart horizontal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<&'static str>,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The single dataset every dashboard chart has.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }
}

/// Build the configuration for a slot.
pub fn build_chart(
    slot: Slot,
    data: &GroupedAverages,
    metric: Metric,
    presentation: &Presentation,
) -> ChartConfig {
    match slot {
        Slot::Year => year_chart(data, metric, presentation),
        Slot::Era => era_chart(data, metric, presentation),
        Slot::Region => bar_chart(data, metric, presentation, 6, false),
        Slot::WellType => bar_chart(data, metric, presentation, 3, false),
    }
}

/// Filled line chart of the yearly averages.
pub fn year_chart(data: &GroupedAverages, metric: Metric, presentation: &Presentation) -> ChartConfig {
    let color = presentation.theme.septenary().to_string();
    let dataset = Dataset {
        label: metric.unit_label().to_string(),
        data: data.values.clone(),
        background_color: Paint::Single(with_alpha(&color, LINE_FILL_ALPHA)),
        border_color: Paint::Single(color),
        border_width: 4,
        point_radius: Some(8),
        point_hover_radius: Some(10),
        fill: Some(true),
        tooltip_labels: tooltip_labels(data, metric, &presentation.numbers),
    };
    ChartConfig {
        chart_type: ChartType::Line,
        data: ChartData {
            labels: data.labels.clone(),
            datasets: vec![dataset],
        },
        options: ChartOptions {
            responsive: true,
            index_axis: None,
            scales: Scales {
                x: category_axis(),
                y: value_axis(metric, &presentation.theme),
            },
            plugins: hidden_legend(),
        },
    }
}

/// Horizontal bars, one per geological era.
pub fn era_chart(data: &GroupedAverages, metric: Metric, presentation: &Presentation) -> ChartConfig {
    bar_chart(data, metric, presentation, 4, true)
}

/// Bars colored from the first `colors` palette entries, repeating when
/// there are more bars than colors.
fn bar_chart(
    data: &GroupedAverages,
    metric: Metric,
    presentation: &Presentation,
    colors: usize,
    horizontal: bool,
) -> ChartConfig {
    let palette = presentation.theme.leading(colors);
    let borders: Vec<String> = (0..data.len())
        .map(|i| palette[i % palette.len()].clone())
        .collect();
    let fills = borders
        .iter()
        .map(|c| with_alpha(c, BAR_FILL_ALPHA))
        .collect();

    let dataset = Dataset {
        label: metric.unit_label().to_string(),
        data: data.values.clone(),
        background_color: Paint::PerBar(fills),
        border_color: Paint::PerBar(borders),
        border_width: 6,
        point_radius: None,
        point_hover_radius: None,
        fill: None,
        tooltip_labels: tooltip_labels(data, metric, &presentation.numbers),
    };

    // The value axis carries the unit title; for horizontal bars that is x.
    let value = value_axis(metric, &presentation.theme);
    let category = category_axis();
    let (scales, index_axis) = if horizontal {
        (Scales { x: value, y: category }, Some("y"))
    } else {
        (Scales { x: category, y: value }, None)
    };

    ChartConfig {
        chart_type: ChartType::Bar,
        data: ChartData {
            labels: data.labels.clone(),
            datasets: vec![dataset],
        },
        options: ChartOptions {
            responsive: true,
            index_axis,
            scales,
            plugins: hidden_legend(),
        },
    }
}

fn value_axis(metric: Metric, theme: &Theme) -> Axis {
    Axis {
        display: true,
        begin_at_zero: Some(false),
        title: Some(AxisTitle {
            display: true,
            text: metric.unit_label().to_string(),
            font: Font {
                size: theme.rem_to_px(AXIS_TITLE_REM),
            },
        }),
    }
}

fn category_axis() -> Axis {
    Axis {
        display: true,
        begin_at_zero: None,
        title: None,
    }
}

fn hidden_legend() -> Plugins {
    Plugins {
        legend: Legend { display: false },
    }
}

fn tooltip_labels(data: &GroupedAverages, metric: Metric, numbers: &NumberFormat) -> Vec<String> {
    data.values
        .iter()
        .map(|v| match v {
            Some(v) => numbers.metric_value(*v, metric),
            None => "No data".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use serde_json::{json, Value};

    fn sample(labels: Vec<Label>, values: Vec<f64>) -> GroupedAverages {
        GroupedAverages {
            labels,
            values: values.into_iter().map(Some).collect(),
        }
    }

    fn presentation() -> Presentation {
        let theme = Theme::from_lookup(
            |name| match name {
                "--color-primary" => Some("#111111".to_string()),
                "--color-secondary" => Some("#222222".to_string()),
                "--color-tertiary" => Some("#333333".to_string()),
                "--color-septenary" => Some("#777777".to_string()),
                _ => None,
            },
            Some(16.0),
        );
        Presentation::new(theme, NumberFormat::default())
    }

    #[test]
    fn year_chart_keeps_label_and_value_order() {
        let data = sample(vec![Label::Integer(2020), Label::Integer(2021)], vec![12.3, 9.8]);
        let config = build_chart(Slot::Year, &data, Metric::Days, &presentation());

        assert_eq!(config.chart_type, ChartType::Line);
        assert_eq!(config.data.labels, vec![Label::Integer(2020), Label::Integer(2021)]);
        let dataset = config.dataset().unwrap();
        assert_eq!(dataset.data, vec![Some(12.3), Some(9.8)]);
        assert_eq!(dataset.border_color, Paint::Single("#777777".to_string()));
        assert_eq!(dataset.background_color, Paint::Single("#77777766".to_string()));
        assert_eq!(dataset.tooltip_labels[0], "12.3 days per 1000m");
    }

    #[test]
    fn year_chart_serializes_for_chart_js() {
        let data = sample(vec![Label::Integer(2020)], vec![1.5]);
        let config = build_chart(Slot::Year, &data, Metric::Cost, &presentation());
        let value: Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["labels"], json!([2020]));
        assert_eq!(value["data"]["datasets"][0]["pointRadius"], 8);
        assert_eq!(value["data"]["datasets"][0]["fill"], true);
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], false);
        assert_eq!(value["options"]["scales"]["y"]["title"]["text"], "Cost per 1000m");
        assert_eq!(value["options"]["scales"]["y"]["title"]["font"]["size"], 12.8);
        assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
        assert!(value["options"].get("indexAxis").is_none());
    }

    #[test]
    fn era_chart_is_horizontal_with_value_title_on_x() {
        let data = sample(vec!["Mesozoic".into(), "Paleozoic".into()], vec![4.0, 6.0]);
        let config = build_chart(Slot::Era, &data, Metric::Days, &presentation());

        assert_eq!(config.chart_type, ChartType::Bar);
        assert_eq!(config.options.index_axis, Some("y"));
        assert!(config.options.scales.x.title.is_some());
        assert!(config.options.scales.y.title.is_none());
    }

    #[test]
    fn bar_colors_repeat_past_slot_palette() {
        let labels = vec!["Oil".into(), "Gas".into(), "Water".into(), "Other".into()];
        let data = sample(labels, vec![1.0, 2.0, 3.0, 4.0]);
        let config = build_chart(Slot::WellType, &data, Metric::Cost, &presentation());
        let dataset = config.dataset().unwrap();

        assert_eq!(
            dataset.border_color,
            Paint::PerBar(vec![
                "#111111".to_string(),
                "#222222".to_string(),
                "#333333".to_string(),
                "#111111".to_string(),
            ])
        );
        match &dataset.background_color {
            Paint::PerBar(fills) => assert_eq!(fills[0], "#11111190"),
            other => panic!("unexpected paint {other:?}"),
        }
        assert_eq!(dataset.border_width, 6);
        assert_eq!(dataset.tooltip_labels[3], "$4.0 per 1000m");
    }

    #[test]
    fn region_chart_is_vertical() {
        let data = sample(vec!["North".into()], vec![2.0]);
        let config = build_chart(Slot::Region, &data, Metric::Days, &presentation());
        assert_eq!(config.options.index_axis, None);
        assert!(config.options.scales.y.title.is_some());
    }

    #[test]
    fn gaps_get_placeholder_tooltips() {
        let data = GroupedAverages {
            labels: vec![Label::Missing],
            values: vec![None],
        };
        let config = build_chart(Slot::Region, &data, Metric::Days, &presentation());
        assert_eq!(config.dataset().unwrap().tooltip_labels, vec!["No data"]);
    }

    #[test]
    fn null_category_is_labelled_unknown() {
        let data = sample(vec!["Cenozoic".into(), Label::Missing], vec![1.0, 2.0]);
        let config = build_chart(Slot::Era, &data, Metric::Days, &presentation());
        let value: Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(value["data"]["labels"], json!(["Cenozoic", "Unknown"]));
    }
}
