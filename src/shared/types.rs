use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Envelope status marker for a successful response. Anything else is
/// treated uniformly as failure.
pub const STATUS_SUCCESS: &str = "success";

/// One user's aggregated usage statistics for the reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub user: String,
    pub completions: u64,
    pub active_hours: f64,
    /// Per-language completion counts. Absent on the wire means empty.
    #[serde(default)]
    pub language_breakdown: BTreeMap<String, u64>,
    pub last_seen: String,
}

/// Wire envelope returned by the usage endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Vec<UsageRecord>,
    /// Server-side response time; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
