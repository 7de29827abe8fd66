use dioxus::prelude::*;

use crate::chart;
use crate::components::{BarChart, PieChart, UsageTable};
use crate::loader::{load, LoadState};

/// The single dashboard view. Owns the `LoadState` signal and renders one
/// of the three lifecycle states; the retry control is only reachable from
/// the error state, so at most one request is ever in flight.
#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_signal(|| LoadState::Loading);

    // Initial fetch on mount
    use_future(move || async move {
        let next = load().await;
        state.set(next);
    });

    let body = match &*state.read() {
        LoadState::Loading => rsx! {
            div { class: "loading", "Loading..." }
        },
        LoadState::Error(message) => rsx! {
            div { class: "error",
                h2 { "Error" }
                p { "{message}" }
                p { class: "hint", "Make sure the backend is running and serving /api/usage" }
                button {
                    class: "retry",
                    onclick: move |_| {
                        state.set(LoadState::Loading);
                        spawn(async move {
                            let next = load().await;
                            state.set(next);
                        });
                    },
                    "Retry"
                }
            }
        },
        LoadState::Loaded(records) => {
            let (bar_data, bar_options) = chart::completions_chart(records);
            let (pie_data, pie_options) = chart::language_chart(records);
            rsx! {
                main { class: "dashboard-main",
                    div { class: "charts-container",
                        div { class: "chart-card", BarChart { data: bar_data, options: bar_options } }
                        div { class: "chart-card", PieChart { data: pie_data, options: pie_options } }
                    }
                    UsageTable { records: records.clone() }
                }
            }
        }
    };

    rsx! {
        header { class: "dashboard-header",
            h1 { "Copilot Usage Dashboard" }
            p { class: "subtitle", "Analytics for team code-assistant usage" }
        }
        {body}
    }
}
