//! # Bank Reference Types
//!
//! The record type for one row of the UAE bank-code dataset, and the
//! validated [`BankCode`] identifier that keys it.
//!
//! Records are reference data: constructed once during registry load and
//! never mutated afterward. The wire form uses camelCase field names
//! (`bankCode`, `shortName`, `routingNo`) to match the existing API
//! consumers.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A UAE bank code as used in AE IBANs: exactly three ASCII digits.
///
/// The code is the unique key of the registry. Zero-padding short codes
/// ("33" -> "033") is the caller's responsibility; this type only accepts
/// the padded form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankCode(String);

/// Rejected [`BankCode`] construction input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("bank code must be exactly 3 ASCII digits, got {0:?}")]
pub struct InvalidBankCode(pub String);

impl BankCode {
    /// Parse a bank code, requiring exactly three ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidBankCode> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(InvalidBankCode(s.to_owned()))
        }
    }

    /// The code as a 3-digit string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Allows `HashMap<BankCode, _>` lookups keyed by plain `&str`.
impl Borrow<str> for BankCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BankCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// UAE bank metadata, one row of the bank-code dataset.
///
/// All fields except `bank_code` are opaque display strings. `bic8` and
/// `bic11` participate in exact-match search; `routing_no` is carried but
/// never validated. `status` is free text of which only `"Live"` is
/// special-cased (case-insensitively) by the registry policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankRecord {
    /// Unique 3-digit bank code.
    pub bank_code: BankCode,
    /// Full participant name.
    pub participant: String,
    /// Short display name.
    pub short_name: String,
    /// 8-character bank identifier code.
    pub bic8: String,
    /// 11-character bank identifier code.
    pub bic11: String,
    /// National routing number, carried as-is.
    pub routing_no: String,
    /// Participation status; only "Live" is meaningful to the policy.
    pub status: String,
}

impl BankRecord {
    /// Whether the record's status is "Live", ignoring case and
    /// surrounding whitespace.
    pub fn is_live(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("Live")
    }
}
