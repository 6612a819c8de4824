//! # Bank Registry Routes
//!
//! Lookup and search over the UAE bank-code registry.
//!
//! Lookup accepts 1-3 digit codes and zero-pads them to the registry's
//! 3-digit key form; anything else passes through untouched and misses.
//! Search clamps the caller's limit into [1, 200] before the core call and
//! sorts results by bank code so the response order is deterministic
//! (the registry itself iterates in hash order).

use aeiban_core::BankRecord;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for `GET /api/banks`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring match over participant + short name (case-insensitive).
    pub q: Option<String>,
    /// Exact match for BIC8 or BIC11 (case-insensitive).
    pub bic: Option<String>,
    /// Maximum number of results, clamped into [1, 200].
    pub limit: Option<i64>,
}

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

/// `GET /api/banks/{code}` — lookup a UAE bank by its 3-digit code.
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<BankRecord>, AppError> {
    let normalized = normalize_code(&code);

    state
        .registry
        .get(&normalized)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Bank code not found".to_owned()))
}

/// `GET /api/banks` — search UAE banks by name substring and/or exact BIC.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<BankRecord>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as usize;

    let mut results = state
        .registry
        .search(params.q.as_deref(), params.bic.as_deref(), limit);
    results.sort_by(|a, b| a.bank_code.cmp(&b.bank_code));

    Json(results)
}

/// Zero-pad 1-3 digit codes to the registry's key form. Input that is not
/// 1-3 ASCII digits is returned as-is and will miss.
fn normalize_code(raw: &str) -> String {
    let code = raw.trim();
    if !code.is_empty() && code.len() <= 3 && code.bytes().all(|b| b.is_ascii_digit()) {
        format!("{code:0>3}")
    } else {
        code.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aeiban_core::BankRegistry;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::routes;

    const DATASET: &str = "\
bank_code,participant,short_name,bic8,bic11,routing_no,status
033,Mashreq Bank PSC,Mashreq,BOMLAEAD,BOMLAEADXXX,203320101,Live
026,Emirates NBD Bank PJSC,Emirates NBD,EBILAEAD,EBILAEADXXX,302620122,Live
046,Union National Bank PJSC,UNB,UNBEAEAA,UNBEAEAAXXX,604620101,Merged
";

    fn app(live_only: bool) -> axum::Router {
        let registry = Arc::new(BankRegistry::from_csv(DATASET, live_only));
        routes::router().with_state(AppState::new(registry))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_normalize_code_pads_short_digits() {
        assert_eq!(normalize_code("33"), "033");
        assert_eq!(normalize_code("3"), "003");
        assert_eq!(normalize_code(" 033 "), "033");
    }

    #[test]
    fn test_normalize_code_passes_through_bad_input() {
        assert_eq!(normalize_code("0330"), "0330");
        assert_eq!(normalize_code("abc"), "abc");
        assert_eq!(normalize_code(""), "");
    }

    #[tokio::test]
    async fn test_get_by_code_pads_and_returns_record() {
        let response = app(true)
            .oneshot(Request::get("/api/banks/33").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["bankCode"], "033");
        assert_eq!(json["participant"], "Mashreq Bank PSC");
    }

    #[tokio::test]
    async fn test_get_by_code_returns_inactive_record() {
        // Lookup is policy-independent: a merged bank is still found.
        let response = app(true)
            .oneshot(Request::get("/api/banks/046").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "Merged");
    }

    #[tokio::test]
    async fn test_get_by_code_unknown_is_404() {
        let response = app(true)
            .oneshot(Request::get("/api/banks/999").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Bank code not found");
    }

    #[tokio::test]
    async fn test_search_by_query_sorted_by_code() {
        let response = app(true)
            .oneshot(Request::get("/api/banks?q=bank").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let codes: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["bankCode"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["026", "033"]);
    }

    #[tokio::test]
    async fn test_search_by_bic() {
        let response = app(true)
            .oneshot(
                Request::get("/api/banks?bic=BOMLAEAD")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["bic8"], "BOMLAEAD");
    }

    #[tokio::test]
    async fn test_search_clamps_limit() {
        let response = app(false)
            .oneshot(
                Request::get("/api/banks?limit=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_respects_live_only_policy() {
        let response = app(true)
            .oneshot(
                Request::get("/api/banks?q=union")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(body_json(response).await.as_array().unwrap().is_empty());

        let response = app(false)
            .oneshot(
                Request::get("/api/banks?q=union")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await[0]["bankCode"], "046");
    }
}
