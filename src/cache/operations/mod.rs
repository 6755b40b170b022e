// 缓存操作

pub mod history;

pub use history::HistoryCacheOperations;
