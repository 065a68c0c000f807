//! EU member state VAT prefixes.
//!
//! VAT prefixes are ISO 3166-1 alpha-2 codes with one exception: Greece
//! registers under `EL` in VIES. `GR` is accepted on input and mapped to `EL`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A member state that issues VAT identification numbers.
///
/// The set is closed: there is exactly one variant per state and aliases are
/// resolved before a value of this type exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    /// Austria
    AT,
    /// Belgium
    BE,
    /// Bulgaria
    BG,
    /// Cyprus
    CY,
    /// Czechia
    CZ,
    /// Germany
    DE,
    /// Denmark
    DK,
    /// Estonia
    EE,
    /// Greece
    #[serde(alias = "GR")]
    EL,
    /// Spain
    ES,
    /// Finland
    FI,
    /// France
    FR,
    /// Croatia
    HR,
    /// Hungary
    HU,
    /// Ireland
    IE,
    /// Italy
    IT,
    /// Lithuania
    LT,
    /// Luxembourg
    LU,
    /// Latvia
    LV,
    /// Malta
    MT,
    /// Netherlands
    NL,
    /// Poland
    PL,
    /// Portugal
    PT,
    /// Romania
    RO,
    /// Sweden
    SE,
    /// Slovenia
    SI,
    /// Slovakia
    SK,
}

/// Input prefixes that are not canonical but resolve to a member state.
static ALIASES: &[(&str, CountryCode)] = &[("GR", CountryCode::EL)];

impl CountryCode {
    /// All member states, sorted by code.
    pub const ALL: [CountryCode; 27] = [
        Self::AT,
        Self::BE,
        Self::BG,
        Self::CY,
        Self::CZ,
        Self::DE,
        Self::DK,
        Self::EE,
        Self::EL,
        Self::ES,
        Self::FI,
        Self::FR,
        Self::HR,
        Self::HU,
        Self::IE,
        Self::IT,
        Self::LT,
        Self::LU,
        Self::LV,
        Self::MT,
        Self::NL,
        Self::PL,
        Self::PT,
        Self::RO,
        Self::SE,
        Self::SI,
        Self::SK,
    ];

    /// The canonical two-letter VAT prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AT => "AT",
            Self::BE => "BE",
            Self::BG => "BG",
            Self::CY => "CY",
            Self::CZ => "CZ",
            Self::DE => "DE",
            Self::DK => "DK",
            Self::EE => "EE",
            Self::EL => "EL",
            Self::ES => "ES",
            Self::FI => "FI",
            Self::FR => "FR",
            Self::HR => "HR",
            Self::HU => "HU",
            Self::IE => "IE",
            Self::IT => "IT",
            Self::LT => "LT",
            Self::LU => "LU",
            Self::LV => "LV",
            Self::MT => "MT",
            Self::NL => "NL",
            Self::PL => "PL",
            Self::PT => "PT",
            Self::RO => "RO",
            Self::SE => "SE",
            Self::SI => "SI",
            Self::SK => "SK",
        }
    }

    /// English short name of the member state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AT => "Austria",
            Self::BE => "Belgium",
            Self::BG => "Bulgaria",
            Self::CY => "Cyprus",
            Self::CZ => "Czechia",
            Self::DE => "Germany",
            Self::DK => "Denmark",
            Self::EE => "Estonia",
            Self::EL => "Greece",
            Self::ES => "Spain",
            Self::FI => "Finland",
            Self::FR => "France",
            Self::HR => "Croatia",
            Self::HU => "Hungary",
            Self::IE => "Ireland",
            Self::IT => "Italy",
            Self::LT => "Lithuania",
            Self::LU => "Luxembourg",
            Self::LV => "Latvia",
            Self::MT => "Malta",
            Self::NL => "Netherlands",
            Self::PL => "Poland",
            Self::PT => "Portugal",
            Self::RO => "Romania",
            Self::SE => "Sweden",
            Self::SI => "Slovenia",
            Self::SK => "Slovakia",
        }
    }

    /// Resolve an uppercase two-letter prefix, honouring aliases.
    ///
    /// Returns `None` for anything that is not a member state VAT prefix,
    /// including lowercase input; run the value through
    /// [`sanitize`](super::sanitize) first.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        if let Some(&(_, code)) = ALIASES.iter().find(|(alias, _)| *alias == prefix) {
            return Some(code);
        }
        Self::ALL
            .binary_search_by(|c| c.as_str().cmp(prefix))
            .ok()
            .map(|i| Self::ALL[i])
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = super::VatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::from_prefix(&upper).ok_or(super::VatError::UnknownCountry { prefix: upper })
    }
}
