//! 测试用的内存替身和请求辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt; // for .collect()
use redis::{ErrorKind, RedisError};
use relay_api::{AppState, cache::KeyValueCache, create_router, database::UserStore};
use serde_json::Value;
use tower::ServiceExt; // for .oneshot()

/// 固定返回给定行的用户存储
pub struct SeededUsers(pub Vec<Value>);

#[async_trait]
impl UserStore for SeededUsers {
    async fn list_users(&self) -> Result<Vec<Value>, sqlx::Error> {
        Ok(self.0.clone())
    }
}

/// 模拟数据库宕机
pub struct UnreachableDatabase;

#[async_trait]
impl UserStore for UnreachableDatabase {
    async fn list_users(&self) -> Result<Vec<Value>, sqlx::Error> {
        Err(sqlx::Error::Protocol("connection refused".into()))
    }
}

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, RedisError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RedisError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 模拟 Redis 宕机
pub struct UnreachableCache;

#[async_trait]
impl KeyValueCache for UnreachableCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, RedisError> {
        Err(RedisError::from((ErrorKind::IoError, "connection refused")))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), RedisError> {
        Err(RedisError::from((ErrorKind::IoError, "connection refused")))
    }
}

pub fn app_with(users: impl UserStore + 'static, cache: impl KeyValueCache + 'static) -> Router {
    create_router(AppState::new(Arc::new(users), Arc::new(cache)))
}

pub fn default_app() -> Router {
    app_with(SeededUsers(Vec::new()), MemoryCache::default())
}

/// 发送请求并把响应体解析为 JSON
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

pub async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri).await
}
