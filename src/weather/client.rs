use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::weather::models::{CurrentWeather, ProviderCurrent};

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("weather provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("weather provider returned status {0}")]
    Status(StatusCode),
    #[error("malformed weather provider payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// OpenWeatherMap 客户端，负责当前天气与历史天气请求
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    weather_base: String,
    history_base: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(
        weather_base: &str,
        history_base: &str,
        api_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            weather_base: weather_base.trim_end_matches('/').to_string(),
            history_base: history_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        Self::new(
            &config.weather_api_base,
            &config.history_api_base,
            &config.api_key,
            config.upstream_timeout(),
        )
    }

    /// 查询当前天气并挑选需要的字段
    pub async fn current(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.weather_base);
        let body = self
            .fetch(&url, &[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .await?;

        let raw: ProviderCurrent = serde_json::from_slice(&body)?;
        Ok(CurrentWeather::from(raw))
    }

    /// 查询从 start（Unix 秒）到现在的逐小时历史数据，原样返回
    pub async fn history(
        &self,
        latitude: f64,
        longitude: f64,
        start: i64,
    ) -> Result<Value, WeatherError> {
        let url = format!("{}/data/2.5/history/city", self.history_base);
        let body = self
            .fetch(&url, &[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("type", "hour".to_string()),
                ("start", start.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<Vec<u8>, WeatherError> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Weather provider {} returned {}", url, status);
            return Err(WeatherError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> WeatherClient {
        WeatherClient::new(&server.uri(), &server.uri(), "test-key", None).unwrap()
    }

    #[tokio::test]
    async fn history_sends_hourly_query_with_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/history/city"))
            .and(query_param("lat", "43.6"))
            .and(query_param("lon", "-116.2"))
            .and(query_param("type", "hour"))
            .and(query_param("start", "1700000000"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cnt": 1,
                "list": [{ "dt": 1700000000 }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let data = client(&server).history(43.6, -116.2, 1_700_000_000).await.unwrap();
        assert_eq!(data["cnt"], 1);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "cod": 401,
                "message": "Invalid API key"
            })))
            .mount(&server)
            .await;

        let err = client(&server).current(1.0, 2.0).await.unwrap_err();
        assert!(matches!(err, WeatherError::Status(StatusCode::UNAUTHORIZED)));
    }

    #[tokio::test]
    async fn unparseable_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/history/city"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server).history(1.0, 2.0, 0).await.unwrap_err();
        assert!(matches!(err, WeatherError::Payload(_)));
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_transport_error() {
        let client = WeatherClient::new("http://127.0.0.1:1", "http://127.0.0.1:1", "k", None).unwrap();
        let err = client.history(1.0, 2.0, 0).await.unwrap_err();
        assert!(matches!(err, WeatherError::Transport(_)));
    }
}
