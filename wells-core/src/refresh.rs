//! Fetch-and-render for one slot, and the orchestrator that refreshes all four.
//!
//! The network and the charting library sit behind [`StatsSource`] and
//! [`ChartSurface`] so the same orchestration runs in the browser (web-sys
//! fetch, Chart.js) and natively (reqwest, JSON preview) and in tests.

use crate::chart_config::{build_chart, ChartConfig, Presentation};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::metric::Metric;
use crate::models::GroupedAverages;
use crate::registry::{ChartHandle, ChartRegistry, Generation, ReplaceOutcome};
use crate::slot::Slot;
use futures::future::join_all;
use log::{debug, error, info};
use serde_json::Value;
use std::cell::RefCell;

/// Where JSON comes from.
#[allow(async_fn_in_trait)]
pub trait StatsSource {
    /// GET `endpoint` and parse the body as JSON. Non-success statuses are errors.
    async fn fetch_json(&self, endpoint: &str) -> Result<Value>;
}

/// Where charts get drawn.
pub trait ChartSurface {
    type Canvas;
    type Handle: ChartHandle;

    /// Look up the canvas for a slot. Fails if it is not on the page.
    fn canvas(&self, canvas_id: &str) -> Result<Self::Canvas>;

    /// Create a chart on `canvas`. The canvas must not hold another chart.
    fn draw(&self, canvas: &Self::Canvas, config: &ChartConfig) -> Result<Self::Handle>;
}

/// One slot's share of a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRequest {
    pub slot: Slot,
    pub metric: Metric,
    pub endpoint: String,
    pub generation: Generation,
}

/// The four requests a refresh issues for `metric`.
pub fn plan_refresh(config: &DashboardConfig, metric: Metric, generation: Generation) -> Vec<SlotRequest> {
    Slot::ALL
        .into_iter()
        .map(|slot| SlotRequest {
            slot,
            metric,
            endpoint: config.grouped_endpoint(metric, slot),
            generation,
        })
        .collect()
}

/// Fetch one slot's data and redraw its chart.
///
/// The request's generation claims the slot before the fetch starts, so a
/// response from an older refresh that arrives afterwards is reported as
/// [`ReplaceOutcome::Stale`] whether or not this refresh succeeds.
///
/// Any failure before the registry is touched (network, status, JSON,
/// response shape, missing canvas) leaves the previous chart in place.
pub async fn refresh_slot<S, C>(
    source: &S,
    surface: &C,
    registry: &RefCell<ChartRegistry<C::Handle>>,
    request: &SlotRequest,
    presentation: &Presentation,
) -> Result<ReplaceOutcome>
where
    S: StatsSource,
    C: ChartSurface,
{
    registry.borrow_mut().begin(request.slot, request.generation);
    let body = source.fetch_json(&request.endpoint).await?;
    let data = GroupedAverages::from_json(&body, request.slot, request.metric)?;
    let config = build_chart(request.slot, &data, request.metric, presentation);
    let canvas = surface.canvas(request.slot.canvas_id())?;

    registry
        .borrow_mut()
        .replace(request.slot, request.generation, || surface.draw(&canvas, &config))
}

#[derive(Debug)]
pub struct SlotResult {
    pub slot: Slot,
    pub endpoint: String,
    pub outcome: Result<ReplaceOutcome>,
}

/// Per-slot outcomes of one refresh.
#[derive(Debug)]
pub struct RefreshReport {
    pub metric: Metric,
    pub generation: Generation,
    pub slots: Vec<SlotResult>,
}

impl RefreshReport {
    /// Slots whose chart was drawn.
    pub fn updated(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.outcome, Ok(ReplaceOutcome::Created | ReplaceOutcome::Replaced)))
            .count()
    }

    pub fn stale(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.outcome, Ok(ReplaceOutcome::Stale)))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SlotResult> {
        self.slots.iter().filter(|s| s.outcome.is_err())
    }
}

/// Refresh all four slots concurrently for `metric`.
///
/// Slots complete in whatever order their responses arrive. Each failure is
/// logged and recorded in the report; it never stops the other slots.
pub async fn refresh_all<S, C>(
    source: &S,
    surface: &C,
    registry: &RefCell<ChartRegistry<C::Handle>>,
    config: &DashboardConfig,
    metric: Metric,
    generation: Generation,
    presentation: &Presentation,
) -> RefreshReport
where
    S: StatsSource,
    C: ChartSurface,
{
    let requests = plan_refresh(config, metric, generation);
    let slots = join_all(requests.into_iter().map(|request| async move {
        let outcome = refresh_slot(source, surface, registry, &request, presentation).await;
        match &outcome {
            Ok(ReplaceOutcome::Stale) => {
                info!(
                    "{}: dropped response from superseded refresh {}",
                    request.endpoint, request.generation
                )
            }
            Ok(done) => debug!("{}: {:?}", request.slot.canvas_id(), done),
            Err(e) => error!(
                "Error fetching or rendering chart {}: {}",
                request.slot.canvas_id(),
                e
            ),
        }
        SlotResult {
            slot: request.slot,
            endpoint: request.endpoint,
            outcome,
        }
    }))
    .await;

    RefreshReport {
        metric,
        generation,
        slots,
    }
}
