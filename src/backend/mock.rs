//! Mock usage statistics, a stand-in for a real code-assistant usage API.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::shared::types::UsageRecord;

const USERS: [&str; 5] = [
    "alice@example.com",
    "bob@example.com",
    "charlie@example.com",
    "diana@example.com",
    "eve@example.com",
];

const LANGUAGES: [&str; 7] = [
    "Python",
    "JavaScript",
    "TypeScript",
    "Java",
    "Go",
    "C#",
    "Ruby",
];

/// Fresh statistics for every known user. The completion count is the sum
/// of the per-language breakdown so chart totals always line up.
pub fn generate_usage() -> Vec<UsageRecord> {
    let mut rng = rand::thread_rng();
    USERS
        .iter()
        .map(|user| {
            let language_count = rng.gen_range(3..=5);
            let mut language_breakdown = BTreeMap::new();
            for language in LANGUAGES.choose_multiple(&mut rng, language_count) {
                language_breakdown.insert(language.to_string(), rng.gen_range(10..=200u64));
            }
            let completions = language_breakdown.values().sum();
            let active_hours = (rng.gen_range(5.0..40.0f64) * 10.0).round() / 10.0;
            let last_seen =
                (Utc::now() - Duration::days(rng.gen_range(0..=7i64))).to_rfc3339();
            UsageRecord {
                user: user.to_string(),
                completions,
                active_hours,
                language_breakdown,
                last_seen,
            }
        })
        .collect()
}
