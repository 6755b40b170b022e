use std::time::Duration;

use serde_json::Value;

use crate::cache::backend::CacheBackend;
use crate::cache::keys::history_key;
use crate::error::AppError;

/// 历史天气缓存过期时间（秒）
pub const HISTORY_CACHE_EXPIRE: u64 = 60 * 60 * 24;

/// 历史天气缓存操作
#[derive(Clone)]
pub struct HistoryCacheOperations {
    backend: CacheBackend,
    ttl: Duration,
}

impl HistoryCacheOperations {
    pub fn new(backend: CacheBackend) -> Self {
        Self {
            backend,
            ttl: Duration::from_secs(HISTORY_CACHE_EXPIRE),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }


    /// 读取缓存的历史数据，读取不刷新过期时间
    pub async fn get_history(&self, location_id: i64, days: u32) -> Result<Option<Value>, AppError> {
        let key = history_key(location_id, days);
        let cached = self.backend.get(&key).await?;

        match cached {
            Some(json) => {
                let value = serde_json::from_str(&json).map_err(|e| {
                    AppError::Cache(format!("corrupt cache entry {}: {}", key, e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// 写入历史数据，整体覆盖，固定 24 小时过期
    pub async fn store_history(
        &self,
        location_id: i64,
        days: u32,
        data: &Value,
    ) -> Result<(), AppError> {
        let key = history_key(location_id, days);
        let json = serde_json::to_string(data)
            .map_err(|e| AppError::Cache(format!("failed to serialize {}: {}", key, e)))?;

        self.backend.set_ex(&key, json, self.ttl).await?;
        tracing::debug!("Set history to cache: {}", key);

        Ok(())
    }
}
