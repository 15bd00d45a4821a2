//! HTTP handlers for irrigation planning

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{validate_coordinates, validate_non_blank, GpsCoordinates};

use crate::error::{AppError, AppResult};
use crate::services::IrrigationPlanner;
use crate::AppState;

/// Request body for an irrigation plan
#[derive(Debug, Deserialize)]
pub struct IrrigationPlanRequest {
    pub crop: String,
    pub stage: String,
    /// [latitude, longitude]
    pub location: [Decimal; 2],
}

/// Irrigation plan response
#[derive(Debug, Serialize)]
pub struct IrrigationPlanResponse {
    pub plan: String,
}

/// Generate a textual irrigation plan for a crop at a location
pub async fn irrigation_plan(
    State(state): State<AppState>,
    Json(input): Json<IrrigationPlanRequest>,
) -> AppResult<Json<IrrigationPlanResponse>> {
    validate_non_blank(&input.crop, "crop")
        .map_err(|field| AppError::ValidationError(format!("{} is required", field)))?;
    validate_non_blank(&input.stage, "stage")
        .map_err(|field| AppError::ValidationError(format!("{} is required", field)))?;

    let [latitude, longitude] = input.location;
    validate_coordinates(latitude, longitude)
        .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

    let location = GpsCoordinates::new(latitude, longitude);
    let planner = IrrigationPlanner::new(state.weather.clone(), state.models.llm.clone());
    let plan = planner.plan(&input.crop, &input.stage, &location).await?;

    Ok(Json(IrrigationPlanResponse { plan }))
}
