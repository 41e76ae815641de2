/// Gratitude message submission endpoint
use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use kansha_core::models::Submission;
use kansha_core::services::sheets::AppendResult;

use crate::{context::ApiContext, error::ApiError};

/// Canonical response contract: exactly one of `data` / `error` is set
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub data: Option<AppendResult>,
    pub error: Option<String>,
}

/// Append one submission to the configured sheet.
///
/// Control flow is a single linear attempt: exchange the service-account
/// assertion for a bearer token, then issue the append call. A token
/// failure means the append is never attempted.
pub async fn submit(
    State(ctx): State<Arc<ApiContext>>,
    Json(submission): Json<Submission>,
) -> Result<Json<SubmitResponse>, ApiError> {
    if !submission.has_required_fields() {
        return Err(ApiError::BadRequest(
            "from, to, and message are required".to_string(),
        ));
    }

    info!(
        from_member_id = %submission.from_member_id,
        to_member_ids = %submission.to_member_ids,
        "Submitting gratitude message"
    );

    let token = ctx.token_exchanger.exchange().await?;

    let row = submission.into_row(chrono::Utc::now());
    let result = ctx
        .sheets_client
        .append_row(&token, &ctx.config.spreadsheet_id, &ctx.config.sheet_range, row)
        .await?;

    Ok(Json(SubmitResponse {
        data: Some(result),
        error: None,
    }))
}
