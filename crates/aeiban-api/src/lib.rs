//! # aeiban-api — Axum API for the AE IBAN Service
//!
//! The HTTP boundary over [`aeiban_core`]. Route handlers carry no
//! business logic; they normalize and clamp caller input, delegate to the
//! registry and the validation pipeline, and map domain outcomes to
//! structured HTTP responses via [`AppError`].
//!
//! ## Routes
//!
//! - `GET  /api/banks/{code}` — lookup by 3-digit bank code; 1-3 digit
//!   input is zero-padded ("33" resolves as "033").
//! - `GET  /api/banks?q=&bic=&limit=` — registry search, results sorted by
//!   bank code ascending, limit clamped into [1, 200].
//! - `POST /api/bank-details` — validates a submitted IBAN and account
//!   holder name; rejections come back as a field-keyed error map.
//!
//! ## State
//!
//! The registry is loaded once in `main`, wrapped in an `Arc`, and shared
//! read-only across all handlers. Nothing behind [`AppState`] is ever
//! mutated after startup.

pub mod error;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;
