use std::time::Duration;

use async_trait::async_trait;
use redis::{
    AsyncCommands, Client as RedisClient, ErrorKind, RedisError,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use tokio::sync::OnceCell;

use crate::cache::KeyValueCache;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);
// 默认配置首次连接会重试 6 次，Redis 宕机时请求会挂起数分钟
const CONNECT_RETRIES: usize = 1;

/// 基于 Redis 的键值缓存
///
/// 所有请求共用同一个连接。连接在第一次使用时建立，断开后由
/// `ConnectionManager` 自动重连。建立连接的总耗时受 `connect_timeout` 限制，
/// Redis 不可用时调用方会很快拿到错误。
pub struct RedisCache {
    client: RedisClient,
    conn: OnceCell<ConnectionManager>,
    connect_timeout: Duration,
    response_timeout: Duration,
}

impl RedisCache {
    /// 只校验 URL，不建立连接
    pub fn open(url: &str) -> Result<Self, RedisError> {
        Ok(Self {
            client: RedisClient::open(url)?,
            conn: OnceCell::new(),
            connect_timeout: CONNECT_TIMEOUT,
            response_timeout: RESPONSE_TIMEOUT,
        })
    }

    pub fn with_timeouts(mut self, connect: Duration, response: Duration) -> Self {
        self.connect_timeout = connect;
        self.response_timeout = response;
        self
    }

    /// 预先建立连接，失败不影响服务启动
    pub async fn warm_up(&self) -> Result<(), RedisError> {
        self.connection().await.map(|_| ())
    }

    async fn connection(&self) -> Result<ConnectionManager, RedisError> {
        let conn = self.conn.get_or_try_init(|| self.connect()).await?;
        Ok(conn.clone())
    }

    async fn connect(&self) -> Result<ConnectionManager, RedisError> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(CONNECT_RETRIES)
            .set_connection_timeout(self.connect_timeout)
            .set_response_timeout(self.response_timeout);

        // 重试间隔不受 connection_timeout 约束，整体再限时一次
        let deadline = self.connect_timeout * (CONNECT_RETRIES as u32 + 1);
        tokio::time::timeout(
            deadline,
            self.client.get_connection_manager_with_config(config),
        )
        .await
        .map_err(|_| RedisError::from((ErrorKind::IoError, "timed out connecting to Redis")))?
    }
}

#[async_trait]
impl KeyValueCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, RedisError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RedisError> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }
}
