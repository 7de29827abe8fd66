use dioxus::prelude::*;

use crate::chart::{ChartData, ChartOptions, LegendPosition};

/// SVG bar chart over a declarative `ChartData` + `ChartOptions` bundle.
/// Knows nothing about what the labels or values mean.
#[allow(non_snake_case)]
#[component]
pub fn BarChart(data: ChartData, options: ChartOptions) -> Element {
    let dataset = data.datasets.first().cloned().unwrap_or_default();
    // Hovered bar index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);
    // Visual params
    let height = 180.0f32;
    let padding = 24.0f32;
    let bar_width = 36.0f32;
    let bar_gap = 18.0f32;
    let n = dataset.data.len().max(1) as f32;
    let width = (n * (bar_width + bar_gap) + padding * 2.0).ceil();
    let max_value = dataset.data.iter().copied().max().unwrap_or(0).max(1) as f32;
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);

    let legend_class = match options.legend {
        LegendPosition::Top => "chart-legend legend-top",
        LegendPosition::Right => "chart-legend legend-right",
    };
    let swatch = dataset.color_at(0).to_string();

    rsx! {
        div { class: "chart",
            h2 { class: "chart-title", "{options.title}" }
            div { class: "{legend_class}",
                span { class: "swatch", style: "background:{swatch}" }
                span { "{dataset.label}" }
            }
            div { class: "chart-scroll",
                svg { class: "bar-chart", view_box: "{view_box}", width: "100%", height: "{(height + padding*2.0).to_string()}",
                    line { x1: "{padding}", y1: "{padding + height}", x2: "{width - padding}", y2: "{padding + height}", stroke: "#1f2937", stroke_width: "1" }
                    {
                        dataset.data.iter().enumerate().map(|(i, value)| {
                            let x = padding + (i as f32) * (bar_width + bar_gap);
                            let h = (*value as f32) / max_value * height;
                            let y = padding + (height - h);
                            let fill = dataset.color_at(i).to_string();
                            rsx!{ rect {
                                key: "{i}", x: "{x}", y: "{y}", width: "{bar_width}", height: "{h}", fill: "{fill}", rx: "3",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }}
                        })
                    }
                    {
                        data.labels.iter().enumerate().map(|(i, label)| {
                            let x = padding + (i as f32) * (bar_width + bar_gap) + bar_width / 2.0;
                            rsx!{ text { key: "{i}", x: "{x}", y: "{height + padding + 16.0}", text_anchor: "middle", class: "axis-label", "{label}" } }
                        })
                    }
                    {
                        match *hovered.read() {
                            Some(i) if i < dataset.data.len() => {
                                let value = dataset.data[i];
                                let label = data.labels.get(i).cloned().unwrap_or_default();
                                let x = padding + (i as f32) * (bar_width + bar_gap) + bar_width / 2.0;
                                let h = (value as f32) / max_value * height;
                                let y = padding + (height - h);
                                let value_label = value.to_string();
                                let cw = 7.0f32; // approx char width at 11px
                                let content_w = (label.len().max(value_label.len()) as f32) * cw + 12.0;
                                let tip_w = content_w.max(12.0).min(width - padding * 2.0);
                                let tip_h = 36.0f32; // two lines
                                let tip_x = (x - tip_w / 2.0).clamp(padding, (width - padding) - tip_w);
                                let tip_y = (y - 10.0 - tip_h).max(6.0);
                                rsx!{ g { key: "tooltip",
                                    line { x1: "{x}", y1: "{y}", x2: "{x}", y2: "{tip_y + tip_h}", stroke: "#38bdf8", stroke_width: "1" }
                                    rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#0f172a", stroke: "#334155", stroke_width: "1" }
                                    text { x: "{tip_x + 8.0}", y: "{tip_y + 16.0}", class: "tooltip-label", "{label}" }
                                    text { x: "{tip_x + 8.0}", y: "{tip_y + 30.0}", class: "tooltip-value", "{value_label}" }
                                }}
                            }
                            _ => rsx!{ Fragment {} }
                        }
                    }
                }
            }
        }
    }
}
