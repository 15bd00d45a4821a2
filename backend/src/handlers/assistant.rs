//! HTTP handlers for the conversational assistant

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{validate_non_blank, ConversationTurn, Entity};

use crate::error::{AppError, AppResult};
use crate::services::assistant::AudioOutcome;
use crate::AppState;

/// Request body for an audio turn
#[derive(Debug, Deserialize)]
pub struct AudioRequest {
    /// Path or URL of the recorded audio
    pub audio_path: String,
}

/// Respond to a recorded audio message
pub async fn assistant_response(
    State(state): State<AppState>,
    Json(input): Json<AudioRequest>,
) -> AppResult<Json<AudioOutcome>> {
    validate_non_blank(&input.audio_path, "audio_path")
        .map_err(|field| AppError::ValidationError(format!("{} is required", field)))?;

    let outcome = state.assistant.respond_to_audio(&input.audio_path).await?;
    Ok(Json(outcome))
}

/// Request body for a text chat turn
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user: String,
}

/// Response body for a text chat turn
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
}

/// Respond to a text chat message
pub async fn chat_response(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    validate_non_blank(&input.user, "user")
        .map_err(|field| AppError::ValidationError(format!("{} is required", field)))?;

    let outcome = state.assistant.chat(&input.user).await?;
    Ok(Json(ChatResponse {
        agent: outcome.reply,
        entities: outcome.entities,
    }))
}

/// Conversation history response
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<ConversationTurn>,
}

/// Get the conversation history as alternating user/assistant turns
pub async fn get_conversation_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: state.assistant.history().await,
    })
}

/// Clear the conversation history
pub async fn clear_conversation_history(State(state): State<AppState>) -> Json<()> {
    state.assistant.clear_history().await;
    Json(())
}
