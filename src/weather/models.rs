use serde::{Deserialize, Serialize};

/// 对外返回的当前天气
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub humidity: Option<f64>,
    pub wind_speed: f64,
}

/// 提供方当前天气响应中用到的字段
#[derive(Debug, Deserialize)]
pub struct ProviderCurrent {
    pub main: ProviderMain,
    pub wind: ProviderWind,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderMain {
    pub temp: f64,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderWind {
    pub speed: f64,
}

impl From<ProviderCurrent> for CurrentWeather {
    fn from(raw: ProviderCurrent) -> Self {
        Self {
            temperature: raw.main.temp,
            // 顶层 humidity 优先，缺省时取 main.humidity
            humidity: raw.humidity.or(raw.main.humidity),
            wind_speed: raw.wind.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selects_fields_from_provider_payload() {
        let raw: ProviderCurrent = serde_json::from_value(json!({
            "main": { "temp": 290 },
            "wind": { "speed": 3 },
            "humidity": 40
        }))
        .unwrap();

        let current = CurrentWeather::from(raw);
        assert_eq!(
            serde_json::to_value(current).unwrap(),
            json!({ "temperature": 290.0, "humidity": 40.0, "wind_speed": 3.0 })
        );
    }

    #[test]
    fn falls_back_to_main_humidity() {
        let raw: ProviderCurrent = serde_json::from_value(json!({
            "main": { "temp": 281.2, "humidity": 77 },
            "wind": { "speed": 1.5, "deg": 200 },
            "name": "Boise"
        }))
        .unwrap();

        assert_eq!(CurrentWeather::from(raw).humidity, Some(77.0));
    }

    #[test]
    fn missing_main_is_rejected() {
        let parsed = serde_json::from_value::<ProviderCurrent>(json!({ "wind": { "speed": 3 } }));
        assert!(parsed.is_err());
    }
}
