use dioxus::prelude::*;

use crate::shared::types::{UsageEnvelope, STATUS_SUCCESS};

/// Usage endpoint: one envelope carrying every user's statistics for the
/// reporting period. Statistics come from the mock generator until a real
/// usage-API client replaces it.
#[server(FetchUsage)]
pub async fn fetch_usage() -> Result<UsageEnvelope, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use chrono::Utc;
        use dioxus::logger::tracing::info;

        let data = crate::backend::mock::generate_usage();
        info!("serving usage statistics for {} users", data.len());
        Ok(UsageEnvelope {
            status: STATUS_SUCCESS.to_string(),
            data,
            timestamp: Some(Utc::now().to_rfc3339()),
        })
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(UsageEnvelope {
            status: STATUS_SUCCESS.to_string(),
            data: vec![],
            timestamp: None,
        })
    }
}
