//! Conversational assistant service
//!
//! Holds the bounded conversation window and orchestrates the per-turn
//! model calls: entity extraction and reply generation run concurrently
//! and are joined before the response is assembled; speech synthesis
//! follows for audio turns.

use serde::Serialize;
use shared::{ConversationTurn, ConversationWindow, Entity};
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::external::ModelSet;

/// Reply used when the language model fails or produces nothing
const FALLBACK_REPLY: &str = "Sorry, I couldn't process that.";

/// Conversational assistant with bounded memory
pub struct Assistant {
    models: ModelSet,
    system_prompt: String,
    window: Mutex<ConversationWindow>,
}

/// Result of one chat turn
#[derive(Debug, Serialize)]
pub struct ChatOutcome {
    pub reply: String,
    /// Extracted entities; absent when the extraction call failed
    pub entities: Option<Vec<Entity>>,
}

/// Result of one audio turn
#[derive(Debug, Serialize)]
pub struct AudioOutcome {
    pub transcription: String,
    pub entities: Option<Vec<Entity>>,
    pub reply: String,
    /// Reference (URL) to the synthesized speech
    pub audio_response: String,
}

impl Assistant {
    /// Create an assistant over an already-connected model set
    pub fn new(models: ModelSet, memory_window: usize) -> Self {
        let current_date = chrono::Local::now().format("%B %d, %Y");
        let system_prompt = format!(
            "You are a friendly and culturally sensitive chat buddy for farmers, \
             specializing in water conservation technology. Your goal is to assist \
             farmers with practical advice on irrigation techniques, water-saving \
             tools, soil moisture management, and sustainable farming practices \
             while respecting their traditional methods. Use the conversation \
             history to provide personalized suggestions. When introducing modern \
             tech, always relate it to their existing practices, highlight how it \
             preserves cultural values, and provide clear, simple benefits. Address \
             concerns about cost, complexity, or cultural misalignment by offering \
             relatable examples and reassuring them of the tech's compatibility \
             with their traditions. Current date: {}.",
            current_date
        );

        Self {
            models,
            system_prompt,
            window: Mutex::new(ConversationWindow::new(memory_window)),
        }
    }

    /// Handle one text chat turn
    ///
    /// Entity extraction and reply generation are reciprocally independent,
    /// so they run concurrently; the history is updated only after both
    /// complete.
    pub async fn chat(&self, text: &str) -> AppResult<ChatOutcome> {
        let prompt = {
            let window = self.window.lock().await;
            compose_prompt(&self.system_prompt, window.turns(), text)
        };

        let (entities, reply) = tokio::join!(
            self.models.ner.extract_entities(text),
            self.models.llm.generate(&prompt, false),
        );

        let entities = match entities {
            Ok(entities) => Some(entities),
            Err(e) => {
                tracing::warn!("entity extraction failed: {}", e);
                None
            }
        };

        let reply = match reply {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => FALLBACK_REPLY.to_string(),
            Err(e) => {
                tracing::warn!("reply generation failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };

        self.window.lock().await.push_exchange(text, reply.as_str());

        Ok(ChatOutcome { reply, entities })
    }

    /// Handle one audio turn: transcribe, chat, synthesize
    pub async fn respond_to_audio(&self, audio_source: &str) -> AppResult<AudioOutcome> {
        let transcription = self.models.asr.transcribe(audio_source).await?;

        let ChatOutcome { reply, entities } = self.chat(&transcription).await?;

        // Markdown emphasis reads badly when spoken
        let speech_text = reply.replace('*', "");
        let audio_response = self.models.tts.synthesize(speech_text.trim()).await?;

        Ok(AudioOutcome {
            transcription,
            entities,
            reply,
            audio_response,
        })
    }

    /// The conversation history as alternating user/assistant turns
    pub async fn history(&self) -> Vec<ConversationTurn> {
        self.window.lock().await.to_vec()
    }

    /// Forget the conversation so far
    pub async fn clear_history(&self) {
        self.window.lock().await.clear();
    }
}

/// Assemble the full prompt: system preamble, windowed history, current query
fn compose_prompt<'a>(
    system_prompt: &str,
    turns: impl Iterator<Item = &'a ConversationTurn>,
    query: &str,
) -> String {
    let mut prompt = String::from(system_prompt);
    prompt.push_str("\n\n");
    for turn in turns {
        let speaker = match turn.speaker {
            shared::Speaker::User => "User",
            shared::Speaker::Assistant => "Assistant",
        };
        prompt.push_str(speaker);
        prompt.push_str(": ");
        prompt.push_str(&turn.text);
        prompt.push('\n');
    }
    prompt.push_str("User: ");
    prompt.push_str(query);
    prompt.push_str("\nAssistant:");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_prompt_with_empty_history() {
        let window = ConversationWindow::new(10);
        let prompt = compose_prompt("System preamble.", window.turns(), "How much water?");
        assert!(prompt.starts_with("System preamble."));
        assert!(prompt.ends_with("User: How much water?\nAssistant:"));
    }

    #[test]
    fn test_compose_prompt_includes_windowed_turns_in_order() {
        let mut window = ConversationWindow::new(10);
        window.push_exchange("hello", "hi there");
        let prompt = compose_prompt("S.", window.turns(), "next question");

        let hello = prompt.find("User: hello").unwrap();
        let hi = prompt.find("Assistant: hi there").unwrap();
        let next = prompt.find("User: next question").unwrap();
        assert!(hello < hi && hi < next);
    }

    #[test]
    fn test_compose_prompt_drops_evicted_turns() {
        let mut window = ConversationWindow::new(1);
        window.push_exchange("first", "reply one");
        window.push_exchange("second", "reply two");
        let prompt = compose_prompt("S.", window.turns(), "q");
        assert!(!prompt.contains("first"));
        assert!(prompt.contains("User: second"));
    }
}
