use std::f32::consts::{FRAC_PI_2, PI, TAU};

use dioxus::prelude::*;

use crate::chart::{ChartData, ChartOptions, LegendPosition};

fn polar(cx: f32, cy: f32, r: f32, ang: f32) -> (f32, f32) {
    (cx + r * ang.cos(), cy + r * ang.sin())
}

/// Wedge from `start` to `end` (radians, clockwise from the top).
fn slice_path(cx: f32, cy: f32, r: f32, start: f32, end: f32) -> String {
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, end);
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
    )
}

/// A single slice covering the whole pie degenerates as an arc (start and
/// end coincide), so it is drawn as two half circles instead.
fn full_circle_path(cx: f32, cy: f32, r: f32) -> String {
    format!(
        "M {cx:.3} {top:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {bottom:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {top:.3} Z",
        top = cy - r,
        bottom = cy + r,
    )
}

/// SVG pie chart over a declarative `ChartData` + `ChartOptions` bundle,
/// with a legend naming every slice. A zero or empty total renders as a
/// neutral empty ring rather than an error.
#[allow(non_snake_case)]
#[component]
pub fn PieChart(data: ChartData, options: ChartOptions) -> Element {
    let dataset = data.datasets.first().cloned().unwrap_or_default();
    let total: u64 = dataset.data.iter().sum();

    let size = 200.0f32;
    let c = size / 2.0;
    let r = c - 4.0;
    let view_box = format!("0 0 {size} {size}");

    // (path, fill) per visible slice, clockwise from 12 o'clock
    let mut slices: Vec<(String, String)> = Vec::new();
    if total > 0 {
        let mut start = -FRAC_PI_2;
        for (i, value) in dataset.data.iter().enumerate() {
            let sweep = (*value as f32 / total as f32) * TAU;
            let fill = dataset.color_at(i).to_string();
            if sweep >= TAU - 0.0005 {
                slices.push((full_circle_path(c, c, r), fill));
            } else if sweep > 0.0 {
                slices.push((slice_path(c, c, r, start, start + sweep), fill));
            }
            start += sweep;
        }
    }

    let legend: Vec<(String, String, u64)> = data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            (
                label.clone(),
                dataset.color_at(i).to_string(),
                dataset.data.get(i).copied().unwrap_or(0),
            )
        })
        .collect();

    let layout_class = match options.legend {
        LegendPosition::Top => "pie-layout legend-top",
        LegendPosition::Right => "pie-layout legend-right",
    };

    rsx! {
        div { class: "chart",
            h2 { class: "chart-title", "{options.title}" }
            div { class: "{layout_class}",
                svg { class: "pie-chart", view_box: "{view_box}", width: "{size}", height: "{size}",
                    if total == 0 {
                        circle { cx: "{c}", cy: "{c}", r: "{r}", fill: "none", stroke: "#1f2937", stroke_width: "2" }
                    }
                    {
                        slices.iter().enumerate().map(|(i, (d, fill))| rsx!{
                            path { key: "{i}", d: "{d}", fill: "{fill}", stroke: "#0f172a", stroke_width: "1" }
                        })
                    }
                }
                ul { class: "chart-legend",
                    {
                        legend.iter().map(|(label, color, value)| rsx!{
                            li { key: "{label}",
                                span { class: "swatch", style: "background:{color}" }
                                span { "{label}: {value}" }
                            }
                        })
                    }
                }
            }
        }
    }
}
