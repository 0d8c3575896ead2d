use std::sync::Arc;

use cache::KeyValueCache;
use database::UserStore;

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;

pub use router::create_router;

/// 所有请求共享的资源，启动时创建一次
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub cache: Arc<dyn KeyValueCache>,
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, cache: Arc<dyn KeyValueCache>) -> Self {
        Self {
            users,
            cache,
            expose_error_details: false,
        }
    }

    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }
}
