//! Irrigation planning service
//!
//! Combines the weather observation, the soil-based water calculator and
//! the language model into a textual irrigation plan for a crop.

use shared::irrigation::{estimate_for_observation, IrrigationEstimate};
use shared::GpsCoordinates;

use crate::error::AppResult;
use crate::external::{LlmModel, WeatherClient};

/// Soil classification used until a soil-data source is wired in.
// TODO: replace with a lookup against a soil survey service once one is
// selected; the calculator already accepts arbitrary soil names.
const ASSUMED_SOIL: &str = "loamy";

/// Builds irrigation plans from weather data and the hosted language model
pub struct IrrigationPlanner {
    weather: WeatherClient,
    llm: LlmModel,
}

impl IrrigationPlanner {
    pub fn new(weather: WeatherClient, llm: LlmModel) -> Self {
        Self { weather, llm }
    }

    /// Produce an irrigation plan for a crop at a location
    ///
    /// Weather fetch failures surface as errors; there is no retry.
    pub async fn plan(
        &self,
        crop: &str,
        growth_stage: &str,
        location: &GpsCoordinates,
    ) -> AppResult<String> {
        let place_name = self.weather.reverse_geocode(location).await?;
        let observation = self.weather.current_observation(location).await?;

        let estimate = estimate_for_observation(ASSUMED_SOIL, &observation);
        log_estimate(ASSUMED_SOIL, &estimate);

        let prompt = compose_plan_prompt(
            crop,
            growth_stage,
            ASSUMED_SOIL,
            &place_name,
            &observation,
            &estimate,
        );

        self.llm.generate(&prompt, true).await
    }
}

fn log_estimate(soil: &str, estimate: &IrrigationEstimate) {
    tracing::debug!(
        soil,
        base_water_need = %estimate.base_water_need,
        temperature_factor = %estimate.temperature_factor,
        humidity_factor = %estimate.humidity_factor,
        wind_factor = %estimate.wind_factor,
        rain_mm = %estimate.rain_mm,
        recommended = %estimate.recommended,
        "computed irrigation volume"
    );
}

/// Build the long-context prompt embedding the computed facts
fn compose_plan_prompt(
    crop: &str,
    growth_stage: &str,
    soil: &str,
    place_name: &str,
    observation: &shared::WeatherObservation,
    estimate: &IrrigationEstimate,
) -> String {
    format!(
        "Exact Location to be mentioned: {place}. \
         Generate an irrigation plan with minimal water wastage for {crop}. \
         Method to be mentioned: Give the most suitable, most efficient \
         technology for irrigation. For {crop} in the {stage} stage growing \
         in {soil} soil, temperature: {temp}K, humidity: {humidity}%, \
         rain: {rain}mm, wind: {wind}m/s. \
         Water {volume} liters per square meter daily at 6 AM.",
        place = place_name,
        crop = crop,
        stage = growth_stage,
        soil = soil,
        temp = observation.temperature,
        humidity = observation.humidity,
        rain = observation.rain_1h_mm,
        wind = observation.wind_speed_mps,
        volume = estimate.recommended,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::WeatherObservation;

    #[test]
    fn test_plan_prompt_embeds_computed_volume() {
        let observation = WeatherObservation::new(
            GpsCoordinates::new(Decimal::new(222604, 4), Decimal::new(848536, 4)),
            Decimal::from(20),
            Decimal::from(50),
            Decimal::ZERO,
            Decimal::ZERO,
        );
        let estimate = estimate_for_observation("loamy", &observation);
        let prompt = compose_plan_prompt(
            "potatoes",
            "vegetative",
            "loamy",
            "Rourkela",
            &observation,
            &estimate,
        );

        assert!(prompt.contains("Rourkela"));
        assert!(prompt.contains("potatoes"));
        assert!(prompt.contains("vegetative"));
        assert!(prompt.contains("Water 14.0 liters per square meter"));
    }
}
