//! # eurovat
//!
//! Validation of EU VAT identification numbers: input normalization, the
//! structural pattern and official check digit algorithm of all 27 member
//! states, and an optional registration check against the EU VIES service.
//!
//! Local validation is pure and synchronous. It tells you whether a number
//! is *well-formed*, never whether it is *registered*; that is what the
//! `vies` feature is for.
//!
//! ## Quick Start
//!
//! ```rust
//! use eurovat::*;
//!
//! assert!(validate(" NL 1234.5678.9B13").is_valid());
//!
//! let outcome = validate("DE123456789");
//! assert_eq!(outcome.reason().as_deref(), Some("checksum mismatch for country DE"));
//!
//! let number = parse("GR094259216").unwrap();
//! assert_eq!(number.country, CountryCode::EL);
//! assert_eq!(number.to_string(), "EL094259216");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Sanitizer, country rules, validation |
//! | `vies` | Async VIES registry lookup (reqwest) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod rules;

#[cfg(feature = "core")]
mod validate;

#[cfg(feature = "vies")]
pub mod vies;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
#[cfg(feature = "core")]
pub use crate::rules::{CountryRule, rule_for};
#[cfg(feature = "core")]
pub use crate::validate::{parse, validate, validate_number};
