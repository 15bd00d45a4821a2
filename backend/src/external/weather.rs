//! Weather and reverse-geocoding API client
//!
//! Integrates with OpenWeatherMap for current conditions and place names.
//! No unit conversion is requested on the weather call, so temperatures
//! arrive in Kelvin; see `shared::irrigation` for the convention the
//! downstream formula assumes.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{GpsCoordinates, WeatherObservation};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    geocoding_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    wind: OwmWind,
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

/// Reverse-geocoding API response entry
#[derive(Debug, Deserialize)]
struct OwmPlace {
    name: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String, geocoding_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            geocoding_url,
        }
    }

    /// Fetch the current weather observation by GPS coordinates
    ///
    /// A non-success response is surfaced as a fetch error; values are
    /// never silently defaulted.
    pub async fn current_observation(
        &self,
        location: &GpsCoordinates,
    ) -> AppResult<WeatherObservation> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}",
            self.base_url, location.latitude, location.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::WeatherApi(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherApi(format!(
                "failed to fetch weather data: {} - {}",
                status, body
            )));
        }

        let data: OwmCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherApi(format!("failed to parse response: {}", e)))?;

        let observation = WeatherObservation::new(
            location.clone(),
            Decimal::from_f64_retain(data.main.temp).unwrap_or_default(),
            Decimal::from_f64_retain(data.main.humidity).unwrap_or_default(),
            data.rain
                .and_then(|r| r.one_hour)
                .map(|v| Decimal::from_f64_retain(v).unwrap_or_default())
                .unwrap_or_default(),
            Decimal::from_f64_retain(data.wind.speed).unwrap_or_default(),
        );

        tracing::debug!(
            temperature = %observation.temperature,
            humidity = %observation.humidity,
            rain_1h_mm = %observation.rain_1h_mm,
            wind_speed_mps = %observation.wind_speed_mps,
            "fetched weather observation"
        );

        Ok(observation)
    }

    /// Resolve a human-readable place name for GPS coordinates
    pub async fn reverse_geocode(&self, location: &GpsCoordinates) -> AppResult<String> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&limit=4&appid={}",
            self.geocoding_url, location.latitude, location.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Geocoding(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Geocoding(format!(
                "reverse geocoding failed: {}",
                status
            )));
        }

        let places: Vec<OwmPlace> = response
            .json()
            .await
            .map_err(|e| AppError::Geocoding(format!("failed to parse response: {}", e)))?;

        places
            .into_iter()
            .next()
            .map(|p| p.name)
            .ok_or_else(|| AppError::Geocoding("no place found for coordinates".to_string()))
    }
}
