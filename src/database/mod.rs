// 数据库模块
// 只负责读取 users 表，行数据原样透传

use async_trait::async_trait;
use serde_json::Value;

pub mod operations;

pub use operations::user::{PgUserStore, connect_pool};

/// 用户数据来源
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 返回 users 表中的全部行，每行是一个以列名为键的 JSON 对象
    async fn list_users(&self) -> Result<Vec<Value>, sqlx::Error>;
}
