pub mod bar_chart;
pub mod dashboard;
pub mod pie_chart;
pub mod usage_table;

pub use bar_chart::BarChart;
pub use dashboard::Dashboard;
pub use pie_chart::PieChart;
pub use usage_table::UsageTable;
