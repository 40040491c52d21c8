//! Well Drilling Efficiency Dashboard
//!
//! Four charts of average drilling days or cost per 1000m (by year, era,
//! region and well type) plus a summary subtitle, all fetched from the
//! backend's `/api/*` endpoints and drawn with Chart.js.
//!
//! Data flow:
//! 1. On startup the Chart.js bridge script is evaluated and the mount
//!    element's `data-api-base` / `data-locale` attributes become the
//!    `DashboardConfig`.
//! 2. The refresh effect subscribes to the toggle state, so it runs once on
//!    mount and again after every button click.
//! 3. Each run spawns the four-way chart refresh and the subtitle update,
//!    tagged with the toggle's generation so late responses from an earlier
//!    click are dropped.

use dioxus::prelude::*;
use wells_chart_ui::browser::{self, BrowserSource, BrowserSurface};
use wells_chart_ui::components::{ChartCard, DashboardHeader, MetricToggle};
use wells_chart_ui::js_bridge;
use wells_chart_ui::state::{new_registry, AppState, SharedRegistry};
use wells_core::chart_config::Presentation;
use wells_core::refresh::refresh_all;
use wells_core::summary::load_subtitle;
use wells_core::toggle::ToggleState;
use wells_core::{DashboardConfig, Slot};

/// Mount element id; also carries the `data-*` configuration attributes.
const ROOT_ID: &str = "wells-dashboard-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    js_bridge::load_chart_scripts();
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(browser::read_config(ROOT_ID)));
    let registry = use_hook(new_registry);

    // Tear down the Chart.js instances with the app
    let owned = registry.clone();
    use_drop(move || owned.borrow_mut().clear());

    // Re-run on mount and whenever a toggle button is clicked
    use_effect(move || {
        let toggle = (state.toggle)();
        let config = state.config.peek().clone();
        refresh_dashboard(state, registry.clone(), config, toggle);
    });

    rsx! {
        div {
            style: "padding: 16px; max-width: 1200px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            DashboardHeader {
                title: "Well Drilling Efficiency".to_string(),
            }

            MetricToggle {}

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px;",
                for slot in Slot::ALL {
                    ChartCard { key: "{slot}", slot }
                }
            }
        }
    }
}

/// Spawn the chart refresh and the subtitle update for the current toggle state.
fn refresh_dashboard(
    mut state: AppState,
    registry: SharedRegistry,
    config: DashboardConfig,
    toggle: ToggleState,
) {
    let metric = toggle.metric();
    let generation = toggle.generation();

    let chart_config = config.clone();
    spawn(async move {
        let presentation = Presentation::new(browser::read_theme(), chart_config.numbers());
        let report = refresh_all(
            &BrowserSource,
            &BrowserSurface,
            &*registry,
            &chart_config,
            metric,
            generation,
            &presentation,
        )
        .await;
        log::info!(
            "Refresh {} ({}): {} drawn, {} stale, {} failed",
            generation,
            metric,
            report.updated(),
            report.stale(),
            report.failures().count()
        );
    });

    spawn(async move {
        match load_subtitle(&BrowserSource, &config, metric).await {
            Ok(text) if state.toggle.peek().is_current(generation) => {
                state.subtitle.set(Some(text));
            }
            Ok(_) => log::info!("Dropped summary from superseded refresh {}", generation),
            Err(e) => log::error!("Error fetching summary statistics: {}", e),
        }
    });
}
