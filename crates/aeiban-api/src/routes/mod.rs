//! # Route Modules
//!
//! Each module defines the handlers for one API surface area; the router
//! is assembled here and given its state in `main`.

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod bank_details;
pub mod banks;

/// Build the application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/banks", get(banks::search))
        .route("/api/banks/{code}", get(banks::get_by_code))
        .route("/api/bank-details", post(bank_details::add))
}
