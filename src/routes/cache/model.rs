use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CacheValueResponse {
    pub key: String,
    /// 键不存在时序列化为 null
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SetValueResponse {
    pub success: bool,
}
