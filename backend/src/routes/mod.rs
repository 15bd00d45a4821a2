//! Route definitions for the AgriVoice backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Conversational assistant
        .nest("/assistant", assistant_routes())
        // Irrigation planning
        .nest("/irrigation", irrigation_routes())
        // Water-conservation analysis
        .nest("/analysis", analysis_routes())
        // Festival/practice prediction
        .nest("/practices", practice_routes())
}

/// Conversational assistant routes
fn assistant_routes() -> Router<AppState> {
    Router::new()
        .route("/respond", post(handlers::assistant_response))
        .route("/chat", post(handlers::chat_response))
        .route(
            "/history",
            get(handlers::get_conversation_history).delete(handlers::clear_conversation_history),
        )
}

/// Irrigation planning routes
fn irrigation_routes() -> Router<AppState> {
    Router::new().route("/plan", post(handlers::irrigation_plan))
}

/// Water-conservation analysis routes
fn analysis_routes() -> Router<AppState> {
    Router::new().route("/water", get(handlers::water_analysis))
}

/// Festival/practice prediction routes
fn practice_routes() -> Router<AppState> {
    Router::new().route("/predict", post(handlers::predict_festival_practice))
}
