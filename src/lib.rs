use sqlx::SqlitePool;

use cache::{CacheBackend, HistoryCacheOperations};
use database::{LocationEntity, LocationOperation};
use error::AppError;
use weather::{HistoryGateway, WeatherClient};

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod weather;

#[derive(Clone)]
pub struct AppState {
    pub locations: LocationOperation,
    pub weather: WeatherClient,
    pub history: HistoryGateway,
}

impl AppState {
    /// 缓存后端在启动时建立，由状态持有并在所有请求间共享
    pub fn new(pool: SqlitePool, cache: CacheBackend, weather: WeatherClient) -> Self {
        let history = HistoryGateway::new(HistoryCacheOperations::new(cache), weather.clone());
        Self {
            locations: LocationOperation::new(pool),
            weather,
            history,
        }
    }

    /// 查找位置，不存在时返回 NotFound
    pub async fn find_location(&self, location_id: i64) -> Result<LocationEntity, AppError> {
        self.locations
            .find_by_id(location_id)
            .await?
            .ok_or(AppError::NotFound)
    }
}
