//! API error types and responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use anchora_core::ApiEnvelope;

/// API error type
///
/// Client input errors map to 4xx, everything else to 5xx. An unknown
/// signer label gets its own code so clients can tell a routing miss from a
/// malformed body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("bad label")]
    BadLabel(String),

    #[error(transparent)]
    Signer(#[from] anchora_core::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::BadLabel(label) => {
                warn!(label = %label, "Request for unknown signer label");
                (StatusCode::BAD_REQUEST, "BAD_LABEL", "bad label".to_string())
            }
            ApiError::Signer(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SIGNER_ERROR",
                err.to_string(),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = ApiEnvelope::<()>::error(code, message);
        (status, Json(body)).into_response()
    }
}
