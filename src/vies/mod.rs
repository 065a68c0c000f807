//! Registration lookup against the EU VIES service.
//!
//! Local validation only proves a number is well-formed. VIES answers
//! whether it is currently *registered*. [`check_active`] combines both and
//! never contacts VIES for a number that fails local validation.
//!
//! # Example
//!
//! ```ignore
//! use eurovat::vies::*;
//!
//! let client = ViesClient::new(ViesConfig::default())?;
//! let status = check_active(&client, "NL 123456789 B13").await?;
//! println!("active: {}", status.active);
//! ```
//!
//! The client imposes only the configured timeout; retries are up to the
//! caller, guided by [`ViesError::is_transient`].

use std::future::Future;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::CountryCode;

mod client;
mod config;
mod error;

pub use client::ViesClient;
pub use config::{VIES_URL, ViesConfig};
pub use error::{ActiveCheckError, ViesError};

/// Registration status of a VAT number as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStatus {
    /// Whether the number is currently registered and active.
    pub active: bool,
    /// Registered trader name, if the member state discloses it.
    pub name: Option<String>,
    /// Registered address, if the member state discloses it.
    pub address: Option<String>,
    /// Date VIES processed the request.
    pub request_date: Option<NaiveDate>,
}

/// Something that can confirm VAT registrations remotely.
///
/// [`ViesClient`] is the production implementation; tests and offline
/// environments can plug in their own.
pub trait RegistryLookup {
    /// Look up `vat_number` (body only, no country prefix) in `country`.
    fn lookup(
        &self,
        country: CountryCode,
        vat_number: &str,
    ) -> impl Future<Output = Result<ActivityStatus, ViesError>> + Send;
}

/// Validate `raw` locally, then ask `registry` whether it is registered.
///
/// # Errors
///
/// [`ActiveCheckError::Invalid`] if local validation fails (the registry is
/// not contacted), [`ActiveCheckError::Registry`] if the lookup fails.
pub async fn check_active<R: RegistryLookup>(
    registry: &R,
    raw: &str,
) -> Result<ActivityStatus, ActiveCheckError> {
    let number = crate::parse(raw)?;
    debug!(number = %number, "local validation passed, querying registry");
    Ok(registry.lookup(number.country, &number.body).await?)
}

/// Check a VAT number against VIES with a default client.
///
/// Convenience for one-off checks; build a [`ViesClient`] once and reuse it
/// when checking many numbers.
///
/// # Errors
///
/// See [`ViesClient::check`].
pub async fn check_vies(country: CountryCode, vat_number: &str) -> Result<ActivityStatus, ViesError> {
    ViesClient::new(ViesConfig::default())?
        .check(country, vat_number)
        .await
}
