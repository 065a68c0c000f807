use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public VIES REST endpoint. No authentication required.
pub const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`ViesClient`](super::ViesClient).
///
/// Deserializable so applications can embed it in their own config files;
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViesConfig {
    /// URL of the `check-vat-number` endpoint.
    pub endpoint: String,
    /// Upper bound for one request, connection included.
    pub timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ViesConfig {
    fn default() -> Self {
        Self {
            endpoint: VIES_URL.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("eurovat/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl ViesConfig {
    /// Point the client at another endpoint (e.g. the VIES test service).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
