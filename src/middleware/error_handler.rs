use axum::{
    body::{Body, HttpBody, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::error::ErrorLogged;

// 超过这个长度或长度未知的响应体不读取，原样转发
const MAX_LOGGED_BODY: u64 = 64 * 1024;

/// 记录 5xx 响应的状态码和响应体，响应本身原样返回
///
/// 已由 `AppError::respond` 记录过的错误不再重复记录。
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;

    let already_logged = response.extensions().get::<ErrorLogged>().is_some();
    if !response.status().is_server_error() || already_logged {
        return response;
    }

    let too_large = response
        .body()
        .size_hint()
        .upper()
        .is_none_or(|len| len > MAX_LOGGED_BODY);
    if too_large {
        error!("{} {} -> {}, body not logged", method, path, response.status());
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY as usize).await {
        Ok(b) => b,
        Err(e) => {
            error!("{} {} -> {}, unreadable body: {}", method, path, parts.status, e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    error!(
        "{} {} -> {}, body: {}",
        method,
        path,
        parts.status,
        String::from_utf8_lossy(&bytes)
    );

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
