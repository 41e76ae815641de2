/// Health check endpoint
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::context::ApiContext;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub credentials: String,
}

/// Health check handler. Verifies the service-account key parses without
/// calling any Google endpoint.
pub async fn handler(
    State(ctx): State<Arc<ApiContext>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let mut all_healthy = true;

    let credentials_status = match ctx.token_exchanger.verify_key() {
        Ok(()) => "ok".to_string(),
        Err(e) => {
            error!("Credential health check failed: {}", e);
            all_healthy = false;
            "error".to_string()
        }
    };

    let response = HealthResponse {
        status: if all_healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            credentials: credentials_status,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
