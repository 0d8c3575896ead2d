use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, ErrorResponse},
};

use super::model::{CacheValueResponse, SetValueResponse};

#[axum::debug_handler]
pub async fn get_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CacheValueResponse>, ErrorResponse> {
    let value = state
        .cache
        .get(&key)
        .await
        .map_err(|e| AppError::from(e).respond(state.expose_error_details))?;

    tracing::debug!("cache get {} hit={}", key, value.is_some());
    Ok(Json(CacheValueResponse { key, value }))
}

#[axum::debug_handler]
pub async fn set_value(
    State(state): State<AppState>,
    Path((key, value)): Path<(String, String)>,
) -> Result<Json<SetValueResponse>, ErrorResponse> {
    state
        .cache
        .set(&key, &value)
        .await
        .map_err(|e| AppError::from(e).respond(state.expose_error_details))?;

    tracing::debug!("cache set {}", key);
    Ok(Json(SetValueResponse { success: true }))
}
