//! HTTP handlers for festival/practice prediction

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::validate_non_blank;

use crate::error::{AppError, AppResult};
use crate::services::practices::PracticePrediction;
use crate::AppState;

/// Request body for festival/practice prediction
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub transcript: String,
}

/// Predict festival and cultural practice labels for a transcript
pub async fn predict_festival_practice(
    State(state): State<AppState>,
    Json(input): Json<PredictRequest>,
) -> AppResult<Json<PracticePrediction>> {
    validate_non_blank(&input.transcript, "transcript")
        .map_err(|field| AppError::ValidationError(format!("{} is required", field)))?;

    let prediction = state.classifier.predict(&input.transcript).await?;
    Ok(Json(prediction))
}
