//! # aeiban-core — AE IBAN Validation and Bank-Code Registry
//!
//! Domain logic for validating United Arab Emirates (AE) International Bank
//! Account Numbers and for answering lookup/search queries over the UAE
//! bank-code reference dataset. This crate has no async code and no I/O
//! beyond the one-time dataset load; everything downstream of construction
//! is a pure function over frozen state.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype for the bank code.** [`BankCode`] is a validated 3-digit
//!    identifier, not a bare string. Construction rejects anything that is
//!    not exactly three ASCII digits.
//!
//! 2. **Rejections are values, not faults.** A failed validation is a normal,
//!    frequent outcome. [`iban::validate`] returns
//!    `Result<BankDetails, ValidationError>` where every error variant
//!    carries one fixed diagnostic message; nothing panics.
//!
//! 3. **Load once, never mutate.** [`BankRegistry`] is built exactly once at
//!    process start and is immutable thereafter. It can be shared across
//!    arbitrarily many concurrent callers without locking.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aeiban-*` crates (leaf of the DAG).
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bank;
pub mod iban;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use bank::{BankCode, BankRecord, InvalidBankCode};
pub use iban::{validate, BankDetails, ValidationError};
pub use registry::{BankRegistry, RegistryError};
