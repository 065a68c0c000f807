//! Core VAT number types: country codes, sanitizing, and validation outcomes.
//!
//! Everything in this module is pure and synchronous. The per-country
//! checksum algorithms live in [`crate::rules`].

mod country;
mod error;
mod number;
mod outcome;
mod sanitize;

pub use country::*;
pub use error::*;
pub use number::*;
pub use outcome::*;
pub use sanitize::*;
