use std::env;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Postgres 端口固定为 5432
pub const DB_PORT: u16 = 5432;
/// Redis 端口固定为 6379
pub const REDIS_PORT: u16 = 6379;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub redis_host: String,
    pub server_host: String,
    pub server_port: u16,
    pub expose_error_details: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 从任意键值来源构建配置，便于测试
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));

        Ok(Config {
            db_host: required("DB_HOST")?,
            db_user: required("DB_USER")?,
            db_password: required("DB_PASSWORD")?,
            db_name: required("DB_NAME")?,
            db_max_connections: positive_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout_secs: positive_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            redis_host: required("REDIS_HOST")?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port: parse_or(&lookup, "SERVER_PORT", 3000)?,
            expose_error_details: parse_or(&lookup, "EXPOSE_ERROR_DETAILS", false)?,
        })
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, REDIS_PORT)
    }

    pub fn pg_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(DB_PORT)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .application_name("relay_api")
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

/// 与 parse_or 相同，但拒绝 0
fn positive_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Default + PartialEq,
{
    let value = parse_or(lookup, var, default)?;
    if value == T::default() {
        return Err(ConfigError::Invalid {
            var,
            value: lookup(var).unwrap_or_default(),
        });
    }
    Ok(value)
}
