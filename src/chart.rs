//! Declarative chart bundles consumed by the chart components.
//!
//! The components only ever see `ChartData` + `ChartOptions`; everything
//! domain-specific (which series, which titles, which colors) is decided
//! here so the renderers stay generic.

use crate::aggregate;
use crate::shared::types::UsageRecord;

/// Slice fills for the pie chart, assigned by position in the emitted label
/// sequence and cycled when languages outnumber the palette.
pub const PALETTE: [&str; 7] = [
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
    "rgba(255, 159, 64, 0.6)",
    "rgba(199, 199, 199, 0.6)",
];

/// Uniform fill for the per-user bars.
pub const BAR_FILL: &str = "rgba(54, 162, 235, 0.6)";

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<u64>,
    /// Fill color table, indexed modulo its length per data point.
    pub background: Vec<String>,
}

impl ChartDataset {
    /// Fill color for data point `index`, cycling the background table.
    pub fn color_at(&self, index: usize) -> &str {
        if self.background.is_empty() {
            BAR_FILL
        } else {
            &self.background[index % self.background.len()]
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendPosition {
    Top,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub legend: LegendPosition,
}

/// Bar-chart bundle: completions per user, in dataset order.
pub fn completions_chart(records: &[UsageRecord]) -> (ChartData, ChartOptions) {
    let (labels, values) = aggregate::per_user_series(records);
    let data = ChartData {
        labels,
        datasets: vec![ChartDataset {
            label: "Completions".to_string(),
            data: values,
            background: vec![BAR_FILL.to_string()],
        }],
    };
    let options = ChartOptions {
        title: "Completions by User".to_string(),
        legend: LegendPosition::Top,
    };
    (data, options)
}

/// Pie-chart bundle: one slice per language observed across the dataset.
pub fn language_chart(records: &[UsageRecord]) -> (ChartData, ChartOptions) {
    let (labels, values) = aggregate::language_totals(records);
    let background = (0..labels.len())
        .map(|i| palette_color(i).to_string())
        .collect();
    let data = ChartData {
        labels,
        datasets: vec![ChartDataset {
            label: "Completions by Language".to_string(),
            data: values,
            background,
        }],
    };
    let options = ChartOptions {
        title: "Language Distribution".to_string(),
        legend: LegendPosition::Right,
    };
    (data, options)
}
