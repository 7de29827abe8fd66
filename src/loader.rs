//! Fetch lifecycle for the usage dataset.

use dioxus::prelude::*;

use crate::api::fetch_usage;
use crate::shared::types::{UsageEnvelope, UsageRecord, STATUS_SUCCESS};

/// View lifecycle for one fetch attempt. The payload lives only in the
/// terminal variants, so "loading" and "error" can never both hold.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Error(String),
    Loaded(Vec<UsageRecord>),
}

/// One fetch attempt. Every outcome is folded into a `LoadState`; the
/// caller never sees an error it has to handle itself. No automatic
/// retries — a new attempt only happens when the user asks for one.
pub async fn load() -> LoadState {
    match fetch_usage().await {
        Ok(envelope) => resolve(envelope),
        Err(err) => LoadState::Error(describe_transport_error(&err)),
    }
}

/// Apply the envelope contract: only the literal success status carries
/// data, any other status is a uniform application-level failure.
fn resolve(envelope: UsageEnvelope) -> LoadState {
    if envelope.status == STATUS_SUCCESS {
        LoadState::Loaded(envelope.data)
    } else {
        LoadState::Error(format!(
            "Request did not succeed (backend status: {})",
            envelope.status
        ))
    }
}

/// Map transport-level failures onto user-facing messages, keeping
/// "could not reach the backend" distinguishable from "backend answered
/// with something we could not decode".
fn describe_transport_error(err: &ServerFnError) -> String {
    match err {
        ServerFnError::Request(msg) => {
            format!("Error connecting to backend: {msg}")
        }
        ServerFnError::Deserialization(msg) => {
            format!("Backend returned malformed data: {msg}")
        }
        other => format!("Error connecting to backend: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(status: &str, data: Vec<UsageRecord>) -> UsageEnvelope {
        UsageEnvelope {
            status: status.to_string(),
            data,
            timestamp: None,
        }
    }

    #[test]
    fn success_status_carries_the_dataset() {
        let record = UsageRecord {
            user: "a@x.com".to_string(),
            completions: 5,
            active_hours: 2.0,
            language_breakdown: [("Python".to_string(), 3), ("Go".to_string(), 2)]
                .into_iter()
                .collect(),
            last_seen: "2024-01-01T10:00:00Z".to_string(),
        };
        match resolve(envelope(STATUS_SUCCESS, vec![record.clone()])) {
            LoadState::Loaded(data) => assert_eq!(data, vec![record]),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn success_with_empty_data_is_still_loaded() {
        match resolve(envelope(STATUS_SUCCESS, vec![])) {
            LoadState::Loaded(data) => assert!(data.is_empty()),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn non_success_status_is_an_error_regardless_of_data() {
        let record = UsageRecord {
            user: "a@x.com".to_string(),
            completions: 5,
            active_hours: 2.0,
            language_breakdown: Default::default(),
            last_seen: "2024-01-01T10:00:00Z".to_string(),
        };
        match resolve(envelope("failure", vec![record])) {
            LoadState::Error(msg) => {
                assert!(!msg.is_empty());
                assert!(msg.contains("failure"));
            }
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn transport_errors_produce_distinguishable_messages() {
        let refused_err: ServerFnError =
            ServerFnError::Request("connection refused".to_string());
        let refused = describe_transport_error(&refused_err);
        assert!(refused.contains("connecting"));
        assert!(refused.contains("connection refused"));

        let malformed_err: ServerFnError =
            ServerFnError::Deserialization("invalid JSON".to_string());
        let malformed = describe_transport_error(&malformed_err);
        assert!(malformed.contains("malformed"));
        assert_ne!(refused, malformed);
    }
}
