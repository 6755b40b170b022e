// 天气模块
// 提供方客户端与历史天气缓存网关

pub mod client;
pub mod history;
pub mod models;

pub use client::{WeatherClient, WeatherError};
pub use history::{HistoryGateway, history_start, parse_days};
pub use models::CurrentWeather;
