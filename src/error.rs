use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redis::RedisError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("cache error: {0}")]
    Cache(#[from] RedisError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// 响应扩展标记：错误已在 `AppError::respond` 中记录过
#[derive(Debug, Clone, Copy)]
pub struct ErrorLogged;

/// 返回给客户端的错误响应
#[derive(Debug)]
pub struct ErrorResponse {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Cache(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn generic_message(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Failed to fetch users",
            AppError::Cache(_) => "Cache unavailable",
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Database(e) => e.to_string(),
            AppError::Cache(e) => e.to_string(),
        }
    }

    /// 记录完整错误，并按配置决定是否把原始错误信息返回给客户端
    pub fn respond(self, expose_details: bool) -> ErrorResponse {
        tracing::error!("{}", self);

        let message = if expose_details {
            self.detail()
        } else {
            self.generic_message().to_string()
        };

        ErrorResponse {
            status: self.status(),
            message,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });

        let mut response = (self.status, body).into_response();
        response.extensions_mut().insert(ErrorLogged);
        response
    }
}
