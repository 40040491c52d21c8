//! Days / cost toggle buttons.

use crate::state::AppState;
use dioxus::prelude::*;
use wells_core::Metric;

/// Two mutually exclusive buttons. Clicking one selects its metric, which
/// starts a new refresh generation; the dashboard's refresh effect picks
/// that up and redraws every chart and the subtitle.
#[component]
pub fn MetricToggle() -> Element {
    let mut state = use_context::<AppState>();
    let toggle = (state.toggle)();

    rsx! {
        div {
            class: "metric-toggle",
            style: "display: flex; gap: 8px; margin: 8px 0 16px 0;",
            for metric in Metric::ALL {
                button {
                    key: "{metric}",
                    id: metric.button_id(),
                    class: toggle.button_class(metric),
                    onclick: move |_| {
                        let generation = state.toggle.write().select(metric);
                        log::info!("Selected {} (refresh {})", metric, generation);
                    },
                    "{metric.button_text()}"
                }
            }
        }
    }
}
