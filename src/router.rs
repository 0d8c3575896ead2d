use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, middleware::log_errors, routes};

pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::root::health))
        .route("/users", get(routes::user::list_users))
        .route("/cache/{key}", get(routes::cache::get_value))
        .route("/cache/{key}/{value}", post(routes::cache::set_value))
        .layer(axum::middleware::from_fn(log_errors));

    // 开发模式下允许所有来源跨域
    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    router.with_state(state)
}
