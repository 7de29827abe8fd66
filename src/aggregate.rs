//! Pure transformations from raw usage records to chart-ready series.
//!
//! Both functions are total over any dataset, including the empty one, and
//! are independent of rendering and network state.

use std::collections::BTreeMap;

use crate::shared::types::UsageRecord;

/// One (label, value) pair per record, in dataset order. The label is the
/// local part of the user identifier (everything before the first `@`, or
/// the whole string when there is none); the value is the completion count.
pub fn per_user_series(records: &[UsageRecord]) -> (Vec<String>, Vec<u64>) {
    let labels = records
        .iter()
        .map(|r| r.user.split('@').next().unwrap_or_default().to_string())
        .collect();
    let values = records.iter().map(|r| r.completions).collect();
    (labels, values)
}

/// Per-language completion totals summed across the whole dataset. A record
/// with an empty breakdown contributes nothing. The enumeration order of
/// languages follows the map traversal and is not part of the contract.
pub fn language_totals(records: &[UsageRecord]) -> (Vec<String>, Vec<u64>) {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        for (language, count) in &record.language_breakdown {
            *totals.entry(language).or_insert(0) += count;
        }
    }
    totals
        .into_iter()
        .map(|(language, total)| (language.to_string(), total))
        .unzip()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    fn record(user: &str, completions: u64, breakdown: &[(&str, u64)]) -> UsageRecord {
        UsageRecord {
            user: user.to_string(),
            completions,
            active_hours: 1.0,
            language_breakdown: breakdown
                .iter()
                .map(|(l, c)| (l.to_string(), *c))
                .collect::<BTreeMap<_, _>>(),
            last_seen: "2024-01-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn per_user_series_splits_labels_and_keeps_order() {
        let records = vec![
            record("alice@example.com", 5, &[]),
            record("bob@example.com", 3, &[]),
            record("no-at-sign", 7, &[]),
        ];
        let (labels, values) = per_user_series(&records);
        assert_eq!(labels, vec!["alice", "bob", "no-at-sign"]);
        assert_eq!(values, vec![5, 3, 7]);
    }

    #[test]
    fn per_user_series_lengths_match_dataset() {
        let records = vec![
            record("a@x.com", 1, &[]),
            record("b@x.com", 2, &[]),
        ];
        let (labels, values) = per_user_series(&records);
        assert_eq!(labels.len(), records.len());
        assert_eq!(values.len(), records.len());
        for (i, r) in records.iter().enumerate() {
            assert_eq!(values[i], r.completions);
        }
    }

    #[test]
    fn empty_dataset_yields_empty_series() {
        let (labels, values) = per_user_series(&[]);
        assert!(labels.is_empty());
        assert!(values.is_empty());

        let (labels, values) = language_totals(&[]);
        assert!(labels.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn language_totals_sums_across_records() {
        let records = vec![
            record("a@x.com", 5, &[("Python", 3), ("Go", 2)]),
            record("b@x.com", 4, &[("Python", 1), ("Rust", 3)]),
        ];
        let (labels, values) = language_totals(&records);
        let totals: HashMap<String, u64> =
            labels.into_iter().zip(values).collect();
        let expected: HashMap<String, u64> = [
            ("Python".to_string(), 4),
            ("Go".to_string(), 2),
            ("Rust".to_string(), 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(totals, expected);
    }

    #[test]
    fn language_totals_conserves_grand_total() {
        let records = vec![
            record("a@x.com", 5, &[("Python", 3), ("Go", 2)]),
            record("b@x.com", 0, &[]),
            record("c@x.com", 9, &[("Go", 4), ("TypeScript", 5)]),
        ];
        let source_sum: u64 = records
            .iter()
            .flat_map(|r| r.language_breakdown.values())
            .sum();
        let (_, values) = language_totals(&records);
        assert_eq!(values.iter().sum::<u64>(), source_sum);
    }

    #[test]
    fn zero_count_languages_are_kept() {
        let records = vec![record("a@x.com", 0, &[("Haskell", 0)])];
        let (labels, values) = language_totals(&records);
        assert_eq!(labels, vec!["Haskell"]);
        assert_eq!(values, vec![0]);
    }

    #[test]
    fn breakdown_less_record_contributes_nothing() {
        let records = vec![
            record("a@x.com", 5, &[("Python", 3)]),
            record("b@x.com", 2, &[]),
        ];
        let (labels, values) = language_totals(&records);
        assert_eq!(labels, vec!["Python"]);
        assert_eq!(values, vec![3]);
    }
}
