use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::Config;
use crate::database::UserStore;

// 内层是固定查询，外层只负责把每一行转换成 JSON
const LIST_USERS_SQL: &str = "SELECT to_jsonb(u) FROM (SELECT * FROM users) u";

/// 创建 Postgres 连接池
///
/// 连接池是惰性的，启动时数据库不可用也不会失败，第一次查询时才建立连接。
/// 数据库不可达时，获取连接最多等待 `db_acquire_timeout`。
pub fn connect_pool(config: &Config) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout())
        .connect_lazy_with(config.pg_connect_options())
}

/// 基于 Postgres 的用户存储
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_users(&self) -> Result<Vec<Value>, sqlx::Error> {
        let rows: Vec<Value> = sqlx::query_scalar(LIST_USERS_SQL)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Fetched {} user rows", rows.len());
        Ok(rows)
    }
}
