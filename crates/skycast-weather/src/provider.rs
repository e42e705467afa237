//! OpenWeatherMap current-conditions client.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use skycast_core::WeatherError;
use std::sync::Arc;
use std::time::Duration;

use crate::types::{Coordinates, WeatherSnapshot};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Wire shape of the provider's `/weather` response; only the fields the
/// widget consumes are declared.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    name: String,
    sys: ApiSys,
    timezone: i64,
    main: ApiMain,
    wind: ApiWind,
    clouds: ApiClouds,
    visibility: Option<u32>,
    weather: Vec<ApiCondition>,
}

#[derive(Debug, Deserialize)]
struct ApiSys {
    country: Option<String>,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ApiClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    main: String,
    description: String,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl WeatherProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Fetch current conditions for the given coordinate.
    ///
    /// Units are fixed to metric; temperatures in the returned snapshot are
    /// Celsius. Any non-2xx status is a uniform [`WeatherError::Api`].
    pub async fn current(&self, coords: &Coordinates) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, coords.latitude, coords.longitude, self.api_key
        );

        tracing::debug!(
            "Requesting weather for {:.4}, {:.4}",
            coords.latitude,
            coords.longitude
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Api {
                status: status.as_u16(),
            });
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Decode(e.to_string()))?;

        let snapshot = snapshot_from(body)?;
        tracing::info!(
            "Weather for {}: {} ({:.1}°C)",
            snapshot.location_name,
            snapshot.condition,
            snapshot.temp_c
        );
        Ok(snapshot)
    }
}

fn snapshot_from(body: ApiResponse) -> Result<WeatherSnapshot, WeatherError> {
    let primary = body
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Decode("response carries no weather condition".into()))?;

    Ok(WeatherSnapshot {
        location_name: body.name,
        country: body.sys.country,
        temp_c: body.main.temp,
        temp_min_c: body.main.temp_min,
        temp_max_c: body.main.temp_max,
        humidity: body.main.humidity,
        pressure_hpa: body.main.pressure,
        wind_speed_ms: body.wind.speed,
        clouds_pct: body.clouds.all,
        visibility_m: body.visibility,
        sunrise: body.sys.sunrise,
        sunset: body.sys.sunset,
        timezone_offset_secs: body.timezone,
        condition: primary.main,
        description: primary.description,
        fetched_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> serde_json::Value {
        serde_json::json!({
            "name": "Lviv",
            "sys": { "country": "UA", "sunrise": 1700000000i64, "sunset": 1700030000i64 },
            "timezone": 7200,
            "main": {
                "temp": 20.4, "temp_min": 18.2, "temp_max": 22.9,
                "humidity": 64, "pressure": 1015
            },
            "wind": { "speed": 4.6 },
            "clouds": { "all": 40 },
            "visibility": 10000,
            "weather": [ { "main": "Clouds", "description": "scattered clouds" } ]
        })
    }

    #[test]
    fn maps_all_consumed_fields() {
        let body: ApiResponse = serde_json::from_value(sample_body()).unwrap();
        let snap = snapshot_from(body).unwrap();

        assert_eq!(snap.location_name, "Lviv");
        assert_eq!(snap.country.as_deref(), Some("UA"));
        assert_eq!(snap.temp_c, 20.4);
        assert_eq!(snap.temp_min_c, 18.2);
        assert_eq!(snap.temp_max_c, 22.9);
        assert_eq!(snap.humidity, 64);
        assert_eq!(snap.pressure_hpa, 1015);
        assert_eq!(snap.wind_speed_ms, 4.6);
        assert_eq!(snap.clouds_pct, 40);
        assert_eq!(snap.visibility_m, Some(10000));
        assert_eq!(snap.timezone_offset_secs, 7200);
        assert_eq!(snap.condition, "Clouds");
        assert_eq!(snap.description, "scattered clouds");
    }

    #[test]
    fn missing_visibility_is_allowed() {
        let mut body = sample_body();
        body.as_object_mut().unwrap().remove("visibility");
        let body: ApiResponse = serde_json::from_value(body).unwrap();
        let snap = snapshot_from(body).unwrap();
        assert_eq!(snap.visibility_m, None);
    }

    #[test]
    fn empty_condition_array_is_decode_error() {
        let mut body = sample_body();
        body["weather"] = serde_json::json!([]);
        let body: ApiResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(
            snapshot_from(body),
            Err(WeatherError::Decode(_))
        ));
    }
}
