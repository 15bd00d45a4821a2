//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// A single weather observation for a location
///
/// Immutable once fetched. Temperature is carried exactly as the upstream
/// weather API reports it (Kelvin when no unit conversion is requested);
/// see the irrigation module for the unit convention the adjustment
/// formula assumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location: GpsCoordinates,
    /// Temperature as reported by the upstream API
    pub temperature: Decimal,
    /// Relative humidity percent (0-100)
    pub humidity: Decimal,
    /// Rainfall over the last hour in mm; zero when the API omits it
    pub rain_1h_mm: Decimal,
    /// Wind speed in m/s
    pub wind_speed_mps: Decimal,
}

impl WeatherObservation {
    pub fn new(
        location: GpsCoordinates,
        temperature: Decimal,
        humidity: Decimal,
        rain_1h_mm: Decimal,
        wind_speed_mps: Decimal,
    ) -> Self {
        Self {
            location,
            temperature,
            humidity,
            rain_1h_mm,
            wind_speed_mps,
        }
    }
}
