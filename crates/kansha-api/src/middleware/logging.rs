/// Request logging middleware
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::context::ApiContext;

/// Request logging middleware
///
/// Logs all incoming requests with:
/// - Request ID (generated)
/// - HTTP method and path
/// - Response status code
/// - Request duration
pub async fn logging_middleware(
    State(_ctx): State<Arc<ApiContext>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    // Generate request ID
    let request_id = Uuid::new_v4().to_string();

    // Extract request details
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Incoming request"
    );

    // Process request
    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_success() {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    } else {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    }

    response
}
