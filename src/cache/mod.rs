// 缓存模块
// 键值均为不透明字符串，不设置过期时间

use async_trait::async_trait;
use redis::RedisError;

pub mod operations;

pub use operations::kv::RedisCache;

/// 键值缓存
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// 读取键，不存在时返回 None
    async fn get(&self, key: &str) -> Result<Option<String>, RedisError>;

    /// 写入键，无条件覆盖旧值
    async fn set(&self, key: &str, value: &str) -> Result<(), RedisError>;
}
