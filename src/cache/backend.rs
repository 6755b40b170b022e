use std::time::Duration;

use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;

use crate::cache::memory::MemoryCache;
use crate::config::{CacheKind, Config};

/// 缓存后端
///
/// Redis 连接在启动时建立一次，之后每次操作克隆句柄复用同一条多路复用连接。
/// 克隆随操作结束被释放，底层连接在进程生命周期内保持打开。
#[derive(Clone)]
pub enum CacheBackend {
    Redis(MultiplexedConnection),
    Memory(MemoryCache),
}

impl CacheBackend {
    /// 根据配置建立缓存后端
    pub async fn connect(config: &Config) -> redis::RedisResult<Self> {
        match config.cache_kind {
            CacheKind::Redis => {
                let client = redis::Client::open(config.redis_url.as_str())?;
                let conn = client.get_multiplexed_async_connection().await?;
                tracing::info!("Connected to Redis at {}", config.redis_url);
                Ok(CacheBackend::Redis(conn))
            }
            CacheKind::Memory => {
                tracing::warn!("Using in-process memory cache, entries are lost on restart");
                Ok(CacheBackend::Memory(MemoryCache::with_capacity(
                    config.memory_cache_capacity,
                )))
            }
        }
    }

    pub async fn get(&self, key: &str) -> redis::RedisResult<Option<String>> {
        match self {
            CacheBackend::Redis(conn) => {
                let mut conn = conn.clone();
                conn.get(key).await
            }
            CacheBackend::Memory(cache) => Ok(cache.get(key).await),
        }
    }

    pub async fn set_ex(&self, key: &str, value: String, ttl: Duration) -> redis::RedisResult<()> {
        match self {
            CacheBackend::Redis(conn) => {
                let mut conn = conn.clone();
                conn.set_ex(key, value, ttl.as_secs()).await
            }
            CacheBackend::Memory(cache) => {
                cache.set_ex(key, value, ttl).await;
                Ok(())
            }
        }
    }
}
