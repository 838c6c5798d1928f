// POST /compare: compare two texts for compatibility.
//
// Both texts must be non-empty; either one failing validation rejects the
// whole request with 400.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::analysis::validate_text;
use crate::scoring::compare::compare_texts;
use crate::web::api_error;

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub text1: String,
    pub text2: String,
}

/// POST /compare: compare two writing samples.
pub async fn compare(Json(req): Json<CompareRequest>) -> Response {
    if validate_text(&req.text1).is_err() || validate_text(&req.text2).is_err() {
        return api_error(StatusCode::BAD_REQUEST, "Both texts required for comparison");
    }

    let result = compare_texts(&req.text1, &req.text2);

    info!(compatibility = result.compatibility, "compared texts");

    Json(result).into_response()
}
