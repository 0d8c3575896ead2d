use axum::Json;
use chrono::Utc;

use super::model::{HealthResponse, WelcomeResponse};

pub const WELCOME_MESSAGE: &str = "Welcome to the API";

#[axum::debug_handler]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// 存活检查，不访问数据库和缓存
#[axum::debug_handler]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Service is healthy",
        timestamp: Utc::now(),
    })
}
