// 缓存模块
// 包含缓存键、缓存后端和缓存操作

pub mod backend;
pub mod keys;
pub mod memory;
pub mod operations;

pub use backend::CacheBackend;
pub use memory::MemoryCache;
pub use operations::HistoryCacheOperations;
