use axum::{Json, extract::State};
use serde_json::Value;

use crate::{
    AppState,
    error::{AppError, ErrorResponse},
};

/// 返回整张 users 表，不分页
#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ErrorResponse> {
    let rows = state
        .users
        .list_users()
        .await
        .map_err(|e| AppError::from(e).respond(state.expose_error_details))?;

    Ok(Json(rows))
}
