use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::cache::HistoryCacheOperations;
use crate::cache::keys::history_key;
use crate::database::LocationEntity;
use crate::error::AppError;
use crate::weather::client::WeatherClient;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// 最多回溯的天数
pub const MAX_HISTORY_DAYS: u32 = 365;

/// 解析 days 参数，只接受 0..=365 的纯数字
pub fn parse_days(raw: Option<&str>) -> Result<u32, AppError> {
    raw.map(str::trim)
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|d| d.parse::<u32>().ok())
        .filter(|&d| d <= MAX_HISTORY_DAYS)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "days must be an integer between 0 and {}",
                MAX_HISTORY_DAYS
            ))
        })
}

/// 历史窗口起点：now - days * 86400（Unix 秒）
pub fn history_start(now: DateTime<Utc>, days: u32) -> i64 {
    now.timestamp() - i64::from(days) * SECONDS_PER_DAY
}

/// 历史天气网关：先查缓存，未命中再请求提供方并回写缓存
///
/// 同一个键的并发未命中会各自请求上游并各自写入，后写覆盖先写。
#[derive(Clone)]
pub struct HistoryGateway {
    cache: HistoryCacheOperations,
    client: WeatherClient,
}

impl HistoryGateway {
    pub fn new(cache: HistoryCacheOperations, client: WeatherClient) -> Self {
        Self { cache, client }
    }

    /// 调用方需先确认位置存在
    pub async fn get_history(&self, location: &LocationEntity, days: u32) -> Result<Value, AppError> {
        // 缓存读取失败直接返回错误，不降级为未命中
        if let Some(cached) = self.cache.get_history(location.id, days).await? {
            tracing::debug!("Get history from cache: {}", history_key(location.id, days));
            return Ok(cached);
        }

        tracing::debug!(
            "History cache miss for {}, calling provider",
            history_key(location.id, days)
        );
        let start = history_start(Utc::now(), days);
        let data = self
            .client
            .history(location.latitude, location.longitude, start)
            .await?;

        self.cache.store_history(location.id, days, &data).await?;

        Ok(data)
    }
}
