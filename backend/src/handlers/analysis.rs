//! HTTP handlers for water-conservation analysis

use axum::{extract::State, Json};
use serde::Serialize;
use shared::ConservationAnalysis;

use crate::services::ConservationAnalyzer;
use crate::AppState;

/// Water-conservation analysis response
///
/// `analysis` is absent when the model call or the structured-output
/// parse failed; the failure is logged server-side.
#[derive(Debug, Serialize)]
pub struct WaterAnalysisResponse {
    pub analysis: Option<ConservationAnalysis>,
}

/// Compare traditional and modern water-conservation practices based on
/// the conversation so far
pub async fn water_analysis(State(state): State<AppState>) -> Json<WaterAnalysisResponse> {
    let history = state.assistant.history().await;
    let analyzer = ConservationAnalyzer::new(state.models.llm.clone());
    let analysis = analyzer.analyze(&history).await;

    Json(WaterAnalysisResponse { analysis })
}
