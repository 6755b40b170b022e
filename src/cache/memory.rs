use std::time::{Duration, Instant};

use moka::Expiry;
use moka::future::Cache;

/// 默认最多缓存的条目数
pub const DEFAULT_MEMORY_CAPACITY: u64 = 10_000;

#[derive(Clone)]
struct MemoryEntry {
    value: String,
    ttl: Duration,
}

/// 每个条目按写入时给定的 TTL 过期，读取不延长
struct EntryTtl;

impl Expiry<String, MemoryEntry> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &MemoryEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    // 覆盖写入时重新计时
    fn expire_after_update(
        &self,
        _key: &String,
        value: &MemoryEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// 进程内缓存，语义与 Redis 的 GET / SET EX 一致，过期条目由 moka 后台淘汰
#[derive(Clone)]
pub struct MemoryCache {
    cache: Cache<String, MemoryEntry>,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CAPACITY)
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .expire_after(EntryTtl)
            .build();
        Self { cache }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key).await.map(|entry| entry.value)
    }

    /// 写入并整体覆盖旧值，过期时间从本次写入开始计算
    pub async fn set_ex(&self, key: &str, value: String, ttl: Duration) {
        self.cache
            .insert(key.to_string(), MemoryEntry { value, ttl })
            .await;
    }

    /// 当前条目数，先处理待淘汰的过期条目
    pub async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
