//! Dashboard title with the summary subtitle underneath.

use crate::state::AppState;
use dioxus::prelude::*;

/// DOM id of the subtitle element.
pub const SUBTITLE_ID: &str = "summary-subtitle";

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    /// Dashboard title
    pub title: String,
}

/// Header showing the title and the latest summary subtitle.
/// The subtitle stays empty until the first summary arrives.
#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    let state = use_context::<AppState>();
    let subtitle = (state.subtitle)().unwrap_or_default();

    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 1.5rem;",
                "{props.title}"
            }
            p {
                id: SUBTITLE_ID,
                style: "margin: 0; font-size: 0.9rem; color: #666;",
                "{subtitle}"
            }
        }
    }
}
