use std::env;
use std::time::Duration;

use crate::cache::memory::DEFAULT_MEMORY_CAPACITY;

/// 缓存后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKind {
    Redis,
    Memory,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub api_key: String,
    pub database_url: String,
    pub redis_url: String,
    pub cache_kind: CacheKind,
    pub memory_cache_capacity: u64,
    pub weather_api_base: String,
    pub history_api_base: String,
    pub server_host: String,
    pub server_port: u16,
    pub upstream_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let cache_kind = match env::var("CACHE_BACKEND")
            .unwrap_or_else(|_| "redis".into())
            .to_lowercase()
            .as_str()
        {
            "memory" => CacheKind::Memory,
            "redis" => CacheKind::Redis,
            other => {
                tracing::warn!("Unknown CACHE_BACKEND {:?}, falling back to redis", other);
                CacheKind::Redis
            }
        };

        Ok(Config {
            // 唯一必填项
            api_key: env::var("API_KEY")?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://weather.db?mode=rwc".into()),
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/".into()),
            cache_kind,
            memory_cache_capacity: env::var("MEMORY_CACHE_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(DEFAULT_MEMORY_CAPACITY),
            weather_api_base: env::var("WEATHER_API_BASE")
                .unwrap_or_else(|_| "https://api.openweathermap.org".into()),
            history_api_base: env::var("HISTORY_API_BASE")
                .unwrap_or_else(|_| "http://history.openweathermap.org".into()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok()),
        })
    }

    /// 上游请求超时，未配置时不设超时
    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }
}
