use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{AssetCreatedResponse, AssetSubmission};
use crate::services::AssetService;

/// Handler for POST /api/assets
///
/// Accepts one nested submission and stores it as one asset row plus its
/// image rows, all in one transaction.
pub async fn create_asset(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AssetCreatedResponse>)> {
    let submission = parse_submission(payload).map_err(|err| {
        tracing::warn!("Rejected asset submission: {}", err);
        err
    })?;

    let asset_service = AssetService::new(state.repositories.asset.clone());

    asset_service.ingest(submission).await.map_err(|err| {
        tracing::error!("Failed to save asset: {}", err);
        ApiError::from(err)
    })?;

    Ok((StatusCode::CREATED, Json(AssetCreatedResponse::default())))
}

/// A body that is absent, not JSON, or not a non-empty object is a client error.
/// A body over the configured limit is reported as too large, not as bad JSON.
fn parse_submission(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<AssetSubmission> {
    let Json(value) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::InvalidPayload(rejection.body_text())
        }
    })?;

    match &value {
        Value::Object(map) if !map.is_empty() => {}
        _ => {
            return Err(ApiError::InvalidPayload(
                "expected a non-empty JSON object".to_string(),
            ))
        }
    }

    serde_json::from_value(value).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}
