//! EU VIES REST API client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ActivityStatus, RegistryLookup, ViesConfig, ViesError};
use crate::core::CountryCode;

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesApiResponse {
    valid: Option<bool>,
    request_date: Option<String>,
    name: Option<String>,
    address: Option<String>,
    /// `VALID`, `INVALID`, or an error code such as `MS_UNAVAILABLE`.
    user_error: Option<String>,
    // Error fields
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

/// VIES API request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViesRequest<'a> {
    country_code: &'a str,
    vat_number: &'a str,
}

/// Reusable VIES client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ViesClient {
    http: reqwest::Client,
    config: ViesConfig,
}

impl ViesClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ViesError::Network` if the TLS backend cannot be initialized.
    pub fn new(config: ViesConfig) -> Result<Self, ViesError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ViesError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &ViesConfig {
        &self.config
    }

    /// Ask VIES whether `vat_number` is currently registered in `country`.
    ///
    /// `vat_number` is the body without the country prefix. It is sent as
    /// given; validate it locally first (see [`check_active`](super::check_active)).
    ///
    /// # Errors
    ///
    /// `ViesError::Network`/`Timeout` on connection issues,
    /// `ViesError::ApiError` if a member state is unavailable or VIES rejects
    /// the input, `ViesError::ParseError` on unexpected response formats.
    pub async fn check(
        &self,
        country: CountryCode,
        vat_number: &str,
    ) -> Result<ActivityStatus, ViesError> {
        let req = ViesRequest {
            country_code: country.as_str(),
            vat_number,
        };
        debug!(%country, vat_number, endpoint = %self.config.endpoint, "querying VIES");

        let resp = self
            .http
            .post(&self.config.endpoint)
            .json(&req)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;

        let result = interpret(status.as_u16(), &body);
        match &result {
            Ok(found) => debug!(%country, active = found.active, "VIES answered"),
            Err(e) => warn!(%country, error = %e, "VIES lookup failed"),
        }
        result
    }
}

impl RegistryLookup for ViesClient {
    async fn lookup(
        &self,
        country: CountryCode,
        vat_number: &str,
    ) -> Result<ActivityStatus, ViesError> {
        self.check(country, vat_number).await
    }
}

fn transport_error(e: reqwest::Error) -> ViesError {
    if e.is_timeout() {
        ViesError::Timeout
    } else {
        ViesError::Network(e.to_string())
    }
}

/// Turn an HTTP status and body into a lookup result.
fn interpret(status: u16, body: &str) -> Result<ActivityStatus, ViesError> {
    let parsed = serde_json::from_str::<ViesApiResponse>(body);
    let success = (200..300).contains(&status);

    let api_resp = match parsed {
        Ok(resp) => resp,
        Err(_) if !success => {
            return Err(ViesError::Http {
                status,
                body: body.into(),
            });
        }
        Err(e) => return Err(ViesError::ParseError(e.to_string())),
    };

    // Check for API-level errors
    if let Some(err) = api_resp.error_wrappers.as_ref().and_then(|w| w.first()) {
        let code = err.error.clone().unwrap_or_else(|| "UNKNOWN".into());
        let message = err.message.clone().unwrap_or_default();
        return Err(ViesError::ApiError { code, message });
    }
    if let Some(code) = api_resp
        .user_error
        .as_deref()
        .filter(|c| *c != "VALID" && *c != "INVALID")
    {
        return Err(ViesError::ApiError {
            code: code.into(),
            message: String::new(),
        });
    }
    if !success {
        return Err(ViesError::Http {
            status,
            body: body.into(),
        });
    }

    let active = api_resp
        .valid
        .ok_or_else(|| ViesError::ParseError("missing 'valid' field".into()))?;

    Ok(ActivityStatus {
        active,
        name: api_resp.name.filter(|n| is_disclosed(n)),
        address: api_resp.address.filter(|a| is_disclosed(a)),
        request_date: api_resp.request_date.as_deref().and_then(parse_request_date),
    })
}

/// VIES sends "---" when a member state does not disclose a field.
fn is_disclosed(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "---"
}

/// Accepts both `2024-01-15` and `2024-01-15T10:22:31.000Z`.
fn parse_request_date(raw: &str) -> Option<NaiveDate> {
    raw.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}
