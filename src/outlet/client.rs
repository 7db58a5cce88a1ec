//! Blocking client for the upstream outlet API.
//!
//! One fetch per call: nothing is cached between calls and failures are
//! never retried.

use std::time::Duration;

use super::types::{FetchError, Outlet, OutletsEnvelope};

const USER_AGENT: &str = concat!("OutletLocator/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the outlet list from `{base_url}/outlets`.
#[derive(Clone)]
pub struct OutletClient {
    base_url: String,
    agent: ureq::Agent,
}

impl OutletClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/outlets", self.base_url.trim_end_matches('/'))
    }

    pub fn fetch_outlets(&self) -> Result<Vec<Outlet>, FetchError> {
        let url = self.endpoint();
        tracing::debug!("Fetching outlets from {}", url);

        let response = match self.agent.get(&url).call() {
            Ok(r) => r,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(e) => return Err(FetchError::Network(e.to_string())),
        };
        tracing::debug!("Outlet API response status: {}", response.status());

        let envelope: OutletsEnvelope = response
            .into_json()
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        tracing::debug!("Received {} outlets", envelope.outlets.len());
        Ok(envelope.outlets)
    }
}
