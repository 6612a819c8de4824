//! # Bank-Code Registry
//!
//! Authoritative, read-only store of UAE bank metadata. Loaded once from a
//! CSV dataset (embedded in the binary by default, or a file supplied at
//! startup) and immutable for the life of the process.
//!
//! ## Dataset Format
//!
//! UTF-8 CSV with a header row and seven columns:
//!
//! ```text
//! bank_code,participant,short_name,bic8,bic11,routing_no,status
//! ```
//!
//! No field in this dataset contains embedded commas or quotes, so rows are
//! split naively. Malformed rows are skipped, never fatal: blank lines,
//! rows with fewer than seven fields, and rows whose code is not exactly
//! three ASCII digits are dropped. On duplicate codes the first occurrence
//! wins. Only failing to *read* a dataset file is fatal — a registry that
//! cannot be constructed is an unrecoverable startup error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::bank::{BankCode, BankRecord};

/// The UAE bank-code dataset shipped with the crate.
const EMBEDDED_DATASET: &str = include_str!("../data/uae-bank-codes.csv");

/// Startup-fatal registry construction error.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The dataset file could not be read.
    #[error("failed to read bank-code dataset {path}: {source}")]
    Io {
        /// Path of the dataset that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Read-only mapping from 3-digit bank code to [`BankRecord`], plus the
/// live-only policy flag fixed at construction.
///
/// # Policy
///
/// With `live_only = true` (the default deployment posture), validity
/// checks and search results are restricted to records whose status is
/// "Live". [`BankRegistry::get`] is deliberately policy-independent so
/// that callers can distinguish an unknown code from a known-but-inactive
/// one.
#[derive(Debug, Clone)]
pub struct BankRegistry {
    by_code: HashMap<BankCode, BankRecord>,
    live_only: bool,
}

impl BankRegistry {
    /// Build a registry from the dataset embedded in the binary.
    pub fn embedded(live_only: bool) -> Self {
        Self::from_csv(EMBEDDED_DATASET, live_only)
    }

    /// Build a registry from CSV text already in memory.
    pub fn from_csv(text: &str, live_only: bool) -> Self {
        Self {
            by_code: parse_dataset(text),
            live_only,
        }
    }

    /// Build a registry from a dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read. This is a
    /// startup-fatal condition; there is no degraded mode.
    pub fn from_path(path: &Path, live_only: bool) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_csv(&text, live_only))
    }

    /// The active live-only policy flag.
    pub fn live_only(&self) -> bool {
        self.live_only
    }

    /// Exact-match lookup by 3-digit code, independent of the live-only
    /// policy. Returns inactive records too.
    ///
    /// The code is assumed already normalized (zero-padded) by the caller;
    /// no re-normalization happens here.
    pub fn get(&self, code: &str) -> Option<&BankRecord> {
        self.by_code.get(code)
    }

    /// Whether the code exists and is acceptable under the active policy:
    /// `false` if absent; otherwise `true` unless `live_only` is set and
    /// the record's status is not "Live".
    pub fn is_valid(&self, code: &str) -> bool {
        match self.by_code.get(code) {
            None => false,
            Some(record) => !self.live_only || record.is_live(),
        }
    }

    /// Search bank metadata.
    ///
    /// Filters are applied in order:
    ///
    /// 1. the live-only policy (when active);
    /// 2. `bic`, if non-empty: case-insensitive *exact* match against BIC8
    ///    or BIC11;
    /// 3. `query`, if non-empty: case-insensitive substring match over
    ///    `participant + " " + short_name`;
    /// 4. truncation to at most `limit` results.
    ///
    /// When both `query` and `bic` are given, a record must satisfy both.
    /// Result order is unspecified (the backing store is keyed, not
    /// ordered); callers needing determinism must sort.
    pub fn search(&self, query: Option<&str>, bic: Option<&str>, limit: usize) -> Vec<BankRecord> {
        let query = query.map(str::trim).unwrap_or_default().to_lowercase();
        let bic = bic.map(str::trim).unwrap_or_default().to_uppercase();

        self.by_code
            .values()
            .filter(|record| !self.live_only || record.is_live())
            .filter(|record| {
                bic.is_empty()
                    || record.bic8.trim().eq_ignore_ascii_case(&bic)
                    || record.bic11.trim().eq_ignore_ascii_case(&bic)
            })
            .filter(|record| {
                if query.is_empty() {
                    return true;
                }
                let hay = format!(
                    "{} {}",
                    record.participant.trim(),
                    record.short_name.trim()
                )
                .to_lowercase();
                hay.contains(&query)
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Number of loaded records, for diagnostics.
    pub fn size(&self) -> usize {
        self.by_code.len()
    }
}

/// Parse the CSV dataset into the code-keyed map.
///
/// Skips the header row, blank lines, rows with fewer than seven fields,
/// and rows whose code field is not a valid [`BankCode`]. First occurrence
/// wins on duplicate codes.
fn parse_dataset(text: &str) -> HashMap<BankCode, BankRecord> {
    let mut by_code = HashMap::new();

    for line in text.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 7 {
            continue;
        }

        let Ok(code) = BankCode::parse(fields[0]) else {
            continue;
        };

        let record = BankRecord {
            bank_code: code.clone(),
            participant: fields[1].to_owned(),
            short_name: fields[2].to_owned(),
            bic8: fields[3].to_owned(),
            bic11: fields[4].to_owned(),
            routing_no: fields[5].to_owned(),
            status: fields[6].to_owned(),
        };

        by_code.entry(code).or_insert(record);
    }

    by_code
}
