//! # AE IBAN Validation Pipeline
//!
//! Decides whether a candidate string is a valid UAE IBAN bound to a known,
//! policy-eligible bank code, and if not, supplies exactly one diagnostic
//! reason. Stages run in a fixed order and short-circuit at the first
//! failure; a single call never reports more than one reason.
//!
//! ## Pipeline
//!
//! ```text
//! raw input
//!   ├─ presence        "IBAN is required"
//!   ├─ normalize       (trim, uppercase, strip whitespace)
//!   ├─ charset         "IBAN must be alphanumeric"
//!   ├─ country         "IBAN must start with AE"
//!   ├─ length          "UAE (AE) IBAN must be exactly 23 characters"
//!   ├─ structure       "Unsupported IBAN country" / "Invalid IBAN format"
//!   ├─ check digits    "Invalid IBAN check digits"
//!   ├─ bank code       "Unknown UAE bank code" / "Inactive UAE bank code"
//!   └─ accept          BankDetails
//! ```
//!
//! The country stage already gates input to AE, so the unsupported-country
//! branch cannot fire today. It stays a real code path rather than an
//! assertion: relaxing the country gate later must not turn it into a
//! panic.
//!
//! ## Check Digits
//!
//! Standard ISO 13616 mod-97 scheme: move the country code and check
//! digits to the end, map letters to two-digit numerals (A=10..Z=35), and
//! require a remainder of 1 over the resulting numeral string.

use thiserror::Error;

use crate::bank::BankCode;
use crate::registry::BankRegistry;

/// One rejection reason from the validation pipeline.
///
/// The `Display` strings are a fixed contract with API consumers; they
/// must not be reworded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or whitespace-only.
    #[error("IBAN is required")]
    Required,

    /// Normalized input contains a character outside `[A-Z0-9]`.
    #[error("IBAN must be alphanumeric")]
    NotAlphanumeric,

    /// Normalized input does not start with the AE country code.
    #[error("IBAN must start with AE")]
    WrongCountry,

    /// Normalized input is not exactly 23 characters.
    #[error("UAE (AE) IBAN must be exactly 23 characters")]
    WrongLength,

    /// The BBAN does not match the country's registered shape.
    #[error("Invalid IBAN format")]
    InvalidFormat,

    /// The mod-97 remainder is not 1.
    #[error("Invalid IBAN check digits")]
    InvalidCheckDigits,

    /// The country code has no registered IBAN structure.
    #[error("Unsupported IBAN country")]
    UnsupportedCountry,

    /// The embedded bank code is absent from the registry.
    #[error("Unknown UAE bank code")]
    UnknownBankCode,

    /// The embedded bank code exists but is rejected by the live-only
    /// policy.
    #[error("Inactive UAE bank code")]
    InactiveBankCode,
}

/// The useful parts of an accepted IBAN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankDetails {
    /// The canonical (normalized) IBAN.
    pub iban: String,
    /// The 3-digit bank code at positions 5-7.
    pub bank_code: BankCode,
    /// The 16-digit account number following the bank code.
    pub account_number: String,
}

/// National IBAN layout for one country.
///
/// Only AE is registered. The table is consulted by the structure stage so
/// that an unregistered country surfaces as
/// [`ValidationError::UnsupportedCountry`] instead of a blind format
/// failure.
struct IbanStructure {
    /// Total IBAN length including country code and check digits.
    total_len: usize,
    /// Length of the bank-code field at the start of the BBAN.
    bank_code_len: usize,
}

/// AE per the SWIFT IBAN registry: 2!a2!n3!n16!n — 23 characters, with a
/// fully numeric BBAN of 3-digit bank code plus 16-digit account number.
fn structure_for(country: &str) -> Option<IbanStructure> {
    match country {
        "AE" => Some(IbanStructure {
            total_len: 23,
            bank_code_len: 3,
        }),
        _ => None,
    }
}

/// Canonicalize raw IBAN input: trim, uppercase, and strip all internal
/// whitespace. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validate a raw IBAN string against structure, check digits, and the
/// bank-code registry.
///
/// # Errors
///
/// Returns the first failing stage's [`ValidationError`]; later stages are
/// not evaluated. Rejection is an ordinary outcome, not a fault.
pub fn validate(raw: &str, registry: &BankRegistry) -> Result<BankDetails, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    let iban = normalize(raw);

    if !iban.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
        return Err(ValidationError::NotAlphanumeric);
    }

    if !iban.starts_with("AE") {
        return Err(ValidationError::WrongCountry);
    }

    if iban.len() != 23 {
        return Err(ValidationError::WrongLength);
    }

    let structure = structure_for(&iban[..2]).ok_or(ValidationError::UnsupportedCountry)?;

    if iban.len() != structure.total_len || !iban[4..].bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat);
    }

    if mod97(&iban) != 1 {
        return Err(ValidationError::InvalidCheckDigits);
    }

    // Bank code sits immediately after the country code and check digits.
    let code_field = &iban[4..4 + structure.bank_code_len];
    let bank_code = BankCode::parse(code_field).map_err(|_| ValidationError::InvalidFormat)?;

    if registry.get(bank_code.as_str()).is_none() {
        return Err(ValidationError::UnknownBankCode);
    }

    if !registry.is_valid(bank_code.as_str()) {
        return Err(ValidationError::InactiveBankCode);
    }

    let account_number = iban[4 + structure.bank_code_len..].to_owned();

    Ok(BankDetails {
        iban,
        bank_code,
        account_number,
    })
}

/// Mod-97 remainder over the rearranged IBAN (BBAN first, then country
/// code and check digits), with letters mapped A=10..Z=35.
///
/// The input must already be uppercase alphanumeric; earlier stages
/// guarantee this, and any other byte contributes nothing to the rolling
/// remainder.
fn mod97(iban: &str) -> u32 {
    let rearranged = iban[4..].bytes().chain(iban[..4].bytes());

    let mut remainder: u32 = 0;
    for b in rearranged {
        match b {
            b'0'..=b'9' => {
                remainder = (remainder * 10 + u32::from(b - b'0')) % 97;
            }
            b'A'..=b'Z' => {
                remainder = (remainder * 100 + u32::from(b - b'A') + 10) % 97;
            }
            _ => {}
        }
    }
    remainder
}
