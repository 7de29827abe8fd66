use dioxus::prelude::*;

use crate::shared::types::UsageRecord;
use crate::utils::format::{format_hours, format_timestamp};

/// Per-user statistics table, one row per record in dataset order. Shows
/// each record's own language breakdown, not the aggregated totals.
#[allow(non_snake_case)]
#[component]
pub fn UsageTable(records: Vec<UsageRecord>) -> Element {
    rsx! {
        div { class: "table-container",
            h2 { "User Statistics" }
            table { class: "user-table",
                thead {
                    tr {
                        th { "User" }
                        th { "Completions" }
                        th { "Active Hours" }
                        th { "Languages" }
                        th { "Last Seen" }
                    }
                }
                tbody {
                    {
                        records.iter().enumerate().map(|(i, record)| {
                            let hours = format_hours(record.active_hours);
                            let seen = format_timestamp(&record.last_seen);
                            rsx!{
                                tr { key: "{i}",
                                    td { "{record.user}" }
                                    td { "{record.completions}" }
                                    td { "{hours}" }
                                    td {
                                        div { class: "language-tags",
                                            {
                                                record.language_breakdown.iter().map(|(language, count)| rsx!{
                                                    span { key: "{language}", class: "language-tag", "{language}: {count}" }
                                                })
                                            }
                                        }
                                    }
                                    td { "{seen}" }
                                }
                            }
                        })
                    }
                }
            }
        }
    }
}
