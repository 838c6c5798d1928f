// POST /analyze: score a single text.
//
// Returns the trait scores, the five qualitative descriptions, the word
// count, and a response timestamp. Empty or whitespace-only text is
// rejected with 400 before the scorer runs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::analysis::validate_text;
use crate::scoring::describe::describe;
use crate::scoring::style::score_text;
use crate::web::api_error;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// POST /analyze: analyze a text and return its personality assessment.
pub async fn analyze(Json(req): Json<AnalyzeRequest>) -> Response {
    if validate_text(&req.text).is_err() {
        return api_error(StatusCode::BAD_REQUEST, "No text provided");
    }

    let scores = score_text(&req.text);
    let description = describe(&scores);

    info!(
        word_count = scores.metrics.word_count,
        extroversion = scores.extroversion,
        "analyzed text"
    );

    Json(serde_json::json!({
        "personality": scores,
        "description": description,
        "word_count": scores.metrics.word_count,
        "timestamp": Utc::now().to_rfc3339(),
    }))
    .into_response()
}
