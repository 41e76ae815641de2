/// API Error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// API Error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        // Canonical error body: data is always null, error always set
        let body = Json(json!({
            "data": null,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Convert kansha-core errors to API errors
impl From<kansha_core::KanshaError> for ApiError {
    fn from(err: kansha_core::KanshaError) -> Self {
        use kansha_core::KanshaError;

        match err {
            KanshaError::TokenEndpoint { .. }
            | KanshaError::SheetsApi { .. }
            | KanshaError::Transport(_) => ApiError::Upstream(err.to_string()),
            KanshaError::Credentials(_) | KanshaError::Config(_) | KanshaError::Unknown(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}
