//! # Bank Details Route
//!
//! Accepts a submitted IBAN plus account holder name and validates both:
//! non-blank checks on each field, then the full AE IBAN pipeline on the
//! IBAN. Nothing is persisted; an accepted submission simply returns 200.
//!
//! Rejections come back as a field-keyed error map so clients can attach
//! each message to the offending input. The IBAN itself is never logged.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Request body for `POST /api/bank-details`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBankDetailsRequest {
    /// Candidate AE IBAN, in any formatting.
    #[serde(default)]
    pub iban: String,
    /// Display name of the account holder.
    #[serde(default)]
    pub account_holder_name: String,
}

/// `POST /api/bank-details` — validate a bank-details submission.
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddBankDetailsRequest>,
) -> Result<StatusCode, AppError> {
    let mut errors = BTreeMap::new();

    if request.account_holder_name.trim().is_empty() {
        errors.insert(
            "accountHolderName".to_owned(),
            "Account holder name is required".to_owned(),
        );
    }

    match aeiban_core::validate(&request.iban, &state.registry) {
        Ok(details) => {
            tracing::info!(bank_code = %details.bank_code, "accepted bank details");
        }
        Err(reason) => {
            errors.insert("iban".to_owned(), reason.to_string());
        }
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(StatusCode::OK)
}
