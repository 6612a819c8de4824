//! # Application State
//!
//! Shared state for the Axum application: one immutable [`BankRegistry`]
//! behind an `Arc`, cloned cheaply into every handler.

use std::sync::Arc;

use aeiban_core::BankRegistry;

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The bank-code registry, built once at startup and never mutated.
    pub registry: Arc<BankRegistry>,
}

impl AppState {
    /// Create application state around a loaded registry.
    pub fn new(registry: Arc<BankRegistry>) -> Self {
        Self { registry }
    }
}
