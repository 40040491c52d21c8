//! Terminal previews of what the dashboard would draw.
//!
//! `chart` runs the same refresh path as the browser, but the surface turns
//! each chart into pretty-printed Chart.js JSON instead of drawing it.

use anyhow::{anyhow, bail};
use log::{debug, info};
use std::cell::RefCell;
use wells_core::chart_config::{ChartConfig, Presentation};
use wells_core::refresh::{plan_refresh, refresh_all, refresh_slot, ChartSurface, StatsSource};
use wells_core::registry::{ChartHandle, ChartRegistry};
use wells_core::summary::load_subtitle;
use wells_core::theme::Theme;
use wells_core::{DashboardConfig, Metric, Result, Slot};

/// A chart rendered to JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewChart {
    pub canvas: String,
    pub json: String,
}

impl ChartHandle for PreviewChart {
    fn dispose(self) {
        debug!("Discarded preview for {}", self.canvas);
    }
}

/// Every canvas exists; drawing serializes the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewSurface;

impl ChartSurface for PreviewSurface {
    type Canvas = String;
    type Handle = PreviewChart;

    fn canvas(&self, canvas_id: &str) -> Result<String> {
        Ok(canvas_id.to_string())
    }

    fn draw(&self, canvas: &String, config: &ChartConfig) -> Result<PreviewChart> {
        let json = serde_json::to_string_pretty(config).map_err(|e| wells_core::DashError::Chart {
            canvas: canvas.clone(),
            reason: e.to_string(),
        })?;
        Ok(PreviewChart {
            canvas: canvas.clone(),
            json,
        })
    }
}

/// Build previews for `slot`, or all four slots when `None`.
///
/// With all four, slots that fail are logged and skipped; the error is
/// returned only after the successful previews are collected.
pub async fn preview_charts<S: StatsSource>(
    source: &S,
    config: &DashboardConfig,
    metric: Metric,
    slot: Option<Slot>,
) -> anyhow::Result<Vec<PreviewChart>> {
    let presentation = Presentation::new(Theme::default(), config.numbers());
    let registry = RefCell::new(ChartRegistry::new());

    let failed = match slot {
        Some(slot) => {
            let request = plan_refresh(config, metric, 0)
                .into_iter()
                .find(|r| r.slot == slot)
                .ok_or_else(|| anyhow!("no request planned for {}", slot))?;
            refresh_slot(source, &PreviewSurface, &registry, &request, &presentation).await?;
            0
        }
        None => {
            let report =
                refresh_all(source, &PreviewSurface, &registry, config, metric, 0, &presentation).await;
            report.failures().count()
        }
    };

    let registry = registry.into_inner();
    let charts: Vec<PreviewChart> = Slot::ALL
        .into_iter()
        .filter_map(|s| registry.get(s).cloned())
        .collect();
    if failed > 0 {
        for chart in &charts {
            info!("Built preview for {}", chart.canvas);
        }
        bail!("{} of {} charts failed", failed, Slot::ALL.len());
    }
    Ok(charts)
}

pub async fn run_chart<S: StatsSource>(
    source: &S,
    config: &DashboardConfig,
    metric: Metric,
    slot: Option<Slot>,
) -> anyhow::Result<()> {
    info!("Building {} chart previews from {}", metric, config.api_base());
    for chart in preview_charts(source, config, metric, slot).await? {
        println!("// {}", chart.canvas);
        println!("{}", chart.json);
    }
    Ok(())
}

pub async fn run_summary<S: StatsSource>(
    source: &S,
    config: &DashboardConfig,
    metric: Metric,
) -> anyhow::Result<()> {
    let text = load_subtitle(source, config, metric).await?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubSource;
    use serde_json::Value;

    #[tokio::test]
    async fn previews_all_four_slots_in_layout_order() {
        let config = DashboardConfig::new("http://backend", "en");
        let source = StubSource::complete(&config);

        let charts = preview_charts(&source, &config, Metric::Cost, None).await.unwrap();

        let canvases: Vec<_> = charts.iter().map(|c| c.canvas.as_str()).collect();
        assert_eq!(
            canvases,
            vec!["wellcountsChart", "eracountsChart", "regioncountsChart", "welltypecountsChart"]
        );
        let year: Value = serde_json::from_str(&charts[0].json).unwrap();
        assert_eq!(year["type"], "line");
        assert_eq!(year["options"]["scales"]["y"]["title"]["text"], "Cost per 1000m");
    }

    #[tokio::test]
    async fn single_slot_fetches_only_that_endpoint() {
        let config = DashboardConfig::new("http://backend", "en");
        let source = StubSource::complete(&config);

        let charts = preview_charts(&source, &config, Metric::Days, Some(Slot::Era)).await.unwrap();

        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].canvas, "eracountsChart");
        assert_eq!(source.requests(), vec!["http://backend/api/days_per_era".to_string()]);
    }

    #[tokio::test]
    async fn failed_slot_fails_the_preview() {
        let config = DashboardConfig::new("http://backend", "en");
        let mut source = StubSource::complete(&config);
        source.fail(config.grouped_endpoint(Metric::Days, Slot::Region), 404);

        let err = preview_charts(&source, &config, Metric::Days, None).await.unwrap_err();
        assert_eq!(err.to_string(), "1 of 4 charts failed");
    }
}
