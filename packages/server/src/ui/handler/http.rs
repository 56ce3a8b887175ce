//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use shiori_shared::api::{
    ErrorDetail, QueryAnswerResult, QuerySubmission, UrlProcessResult, UrlSubmission,
};

use crate::{
    ui::state::AppState,
    usecase::{AnswerQueryError, PROCESS_URL_SUCCESS_MESSAGE},
};

type ApiError = (StatusCode, Json<ErrorDetail>);

fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(ErrorDetail::new(detail)))
}

/// Malformed request bodies are answered with 422 and the rejection text
fn invalid_body(rejection: JsonRejection) -> ApiError {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    api_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Load the page at the submitted URL and make it the context of `/query`
pub async fn process_url(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UrlSubmission>, JsonRejection>,
) -> Result<Json<UrlProcessResult>, ApiError> {
    let Json(submission) = body.map_err(invalid_body)?;

    match state.process_url_usecase.execute(&submission.url).await {
        Ok(_) => Ok(Json(UrlProcessResult {
            message: Some(PROCESS_URL_SUCCESS_MESSAGE.to_string()),
        })),
        Err(e) => {
            tracing::error!("Error in process_url: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Answer a question about the last processed page
pub async fn query(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuerySubmission>, JsonRejection>,
) -> Result<Json<QueryAnswerResult>, ApiError> {
    let Json(submission) = body.map_err(invalid_body)?;

    match state.answer_query_usecase.execute(&submission.query).await {
        Ok(answer) => Ok(Json(QueryAnswerResult {
            answer: Some(answer),
        })),
        Err(e @ AnswerQueryError::NoUrlProcessed) => {
            tracing::warn!("Query received before any URL was processed");
            Err(api_error(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e @ AnswerQueryError::Model(_)) => {
            tracing::error!("Error in query: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
