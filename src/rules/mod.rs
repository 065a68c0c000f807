//! Per-country VAT number rules and the registry that dispatches to them.
//!
//! Each member state has one module holding exactly one [`CountryRule`]:
//! a structural predicate and the official check digit algorithm. Rules are
//! plain `static` data, so the registry is immutable and can be read from
//! any number of threads without synchronization.
//!
//! Validation always runs the structural check first; checksum functions
//! are only ever called on bodies that passed it.

use crate::core::{CountryCode, ValidationOutcome, VatError};

pub(crate) mod digits;

mod at;
mod be;
mod bg;
mod cy;
mod cz;
mod de;
mod dk;
mod ee;
mod el;
mod es;
mod fi;
mod fr;
mod hr;
mod hu;
mod ie;
mod it;
mod lt;
mod lu;
mod lv;
mod mt;
mod nl;
mod pl;
mod pt;
mod ro;
mod se;
mod si;
mod sk;

/// Structural pattern plus check digit algorithm for one member state.
#[derive(Debug)]
pub struct CountryRule {
    country: CountryCode,
    expected: &'static str,
    structure: fn(&str) -> bool,
    checksum: fn(&str) -> bool,
}

impl CountryRule {
    pub(crate) const fn new(
        country: CountryCode,
        expected: &'static str,
        structure: fn(&str) -> bool,
        checksum: fn(&str) -> bool,
    ) -> Self {
        Self {
            country,
            expected,
            structure,
            checksum,
        }
    }

    /// The member state this rule belongs to.
    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// Human-readable description of the body shape (e.g. "9 digits, 'B', 2 digits").
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Whether `body` has the length and character classes this country issues.
    pub fn is_well_formed(&self, body: &str) -> bool {
        (self.structure)(body)
    }

    /// Run the structural check, then the checksum.
    pub fn validate(&self, body: &str) -> ValidationOutcome {
        if !(self.structure)(body) {
            return ValidationOutcome::Invalid(VatError::StructuralMismatch {
                country: self.country,
                expected: self.expected,
            });
        }
        if !(self.checksum)(body) {
            return ValidationOutcome::Invalid(VatError::ChecksumMismatch {
                country: self.country,
            });
        }
        ValidationOutcome::Valid
    }
}

/// Look up the rule for a member state.
///
/// Total over [`CountryCode`]: adding a variant without a rule does not compile.
pub fn rule_for(country: CountryCode) -> &'static CountryRule {
    match country {
        CountryCode::AT => &at::RULE,
        CountryCode::BE => &be::RULE,
        CountryCode::BG => &bg::RULE,
        CountryCode::CY => &cy::RULE,
        CountryCode::CZ => &cz::RULE,
        CountryCode::DE => &de::RULE,
        CountryCode::DK => &dk::RULE,
        CountryCode::EE => &ee::RULE,
        CountryCode::EL => &el::RULE,
        CountryCode::ES => &es::RULE,
        CountryCode::FI => &fi::RULE,
        CountryCode::FR => &fr::RULE,
        CountryCode::HR => &hr::RULE,
        CountryCode::HU => &hu::RULE,
        CountryCode::IE => &ie::RULE,
        CountryCode::IT => &it::RULE,
        CountryCode::LT => &lt::RULE,
        CountryCode::LU => &lu::RULE,
        CountryCode::LV => &lv::RULE,
        CountryCode::MT => &mt::RULE,
        CountryCode::NL => &nl::RULE,
        CountryCode::PL => &pl::RULE,
        CountryCode::PT => &pt::RULE,
        CountryCode::RO => &ro::RULE,
        CountryCode::SE => &se::RULE,
        CountryCode::SI => &si::RULE,
        CountryCode::SK => &sk::RULE,
    }
}

/// Validate a body against one country's rule. Shorthand used by the
/// per-country unit tests.
#[cfg(test)]
pub(crate) fn check(country: CountryCode, body: &str) -> ValidationOutcome {
    rule_for(country).validate(body)
}
