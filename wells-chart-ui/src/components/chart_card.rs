//! A titled canvas for one chart slot.

use dioxus::prelude::*;
use wells_core::Slot;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    /// The slot whose canvas this card hosts (Chart.js draws into it)
    pub slot: Slot,
    /// Optional minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// Card with the slot's heading and its canvas.
#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; padding: 12px; background: var(--color-surface, #FFFFFF); border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
        props.min_height
    );

    rsx! {
        div {
            class: "chart-card",
            style: "{style}",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 1rem;",
                "{props.slot.title()}"
            }
            canvas {
                id: "{props.slot.canvas_id()}",
            }
        }
    }
}
