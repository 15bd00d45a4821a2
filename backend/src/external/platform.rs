//! Hosted model platform client
//!
//! Client for the model-hosting platform that serves the speech
//! recognition, entity extraction, language-generation and speech
//! synthesis models. Each model is invoked by ID with a JSON payload and
//! returns its result in a common envelope.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use shared::Entity;

use crate::config::PlatformConfig;
use crate::error::{AppError, AppResult};

/// Low-level client for the model platform
#[derive(Clone)]
pub struct PlatformClient {
    api_endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Common response envelope for a model run
#[derive(Debug, Deserialize)]
pub struct ModelRunResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Primary model output; a string for ASR/LLM/TTS models
    #[serde(default)]
    pub data: Value,
    /// Per-span details; populated by the NER model
    #[serde(default)]
    pub details: Vec<Value>,
}

impl ModelRunResponse {
    /// The primary output as text
    pub fn text_data(&self) -> AppResult<String> {
        self.data
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::ModelApi("model returned non-text data".to_string()))
    }
}

impl PlatformClient {
    /// Create a new platform client
    pub fn new(api_endpoint: String, api_key: String) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_endpoint,
            api_key,
            http_client,
        })
    }

    /// Run a hosted model by ID with a JSON payload
    pub async fn run(&self, model_id: &str, payload: Value) -> AppResult<ModelRunResponse> {
        let url = format!("{}/execute/{}", self.api_endpoint, model_id);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ModelApi(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ModelApi(format!(
                "model {} returned {}: {}",
                model_id, status, body
            )));
        }

        let result: ModelRunResponse = response
            .json()
            .await
            .map_err(|e| AppError::ModelApi(format!("failed to parse response: {}", e)))?;

        Ok(result)
    }

    /// Verify that a model ID exists on the platform
    pub async fn describe(&self, model_id: &str) -> AppResult<()> {
        let url = format!("{}/models/{}", self.api_endpoint, model_id);

        let response = self
            .http_client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| AppError::ModelApi(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ModelApi(format!(
                "model {} unavailable: {}",
                model_id,
                response.status()
            )));
        }

        Ok(())
    }
}

/// Automatic speech recognition model
#[derive(Clone)]
pub struct AsrModel {
    platform: PlatformClient,
    model_id: String,
}

impl AsrModel {
    pub fn new(platform: PlatformClient, model_id: String) -> Self {
        Self { platform, model_id }
    }

    /// Transcribe an audio source (path or URL) to English text
    pub async fn transcribe(&self, audio_source: &str) -> AppResult<String> {
        tracing::debug!(model_id = %self.model_id, "transcribing audio");
        let response = self
            .platform
            .run(
                &self.model_id,
                json!({
                    "source_audio": audio_source,
                    "language": "en",
                }),
            )
            .await?;
        let transcript = response.text_data()?;
        tracing::debug!(transcript = %transcript, "transcription completed");
        Ok(transcript)
    }
}

/// Named entity recognition model
#[derive(Clone)]
pub struct NerModel {
    platform: PlatformClient,
    model_id: String,
}

/// Per-span detail in the NER response
#[derive(Debug, Deserialize)]
struct NerDetail {
    #[serde(rename = "boundingBox")]
    bounding_box: NerSpan,
    data: String,
}

#[derive(Debug, Deserialize)]
struct NerSpan {
    start: usize,
    end: usize,
}

impl NerModel {
    pub fn new(platform: PlatformClient, model_id: String) -> Self {
        Self { platform, model_id }
    }

    /// Extract labeled entity spans from text
    pub async fn extract_entities(&self, text: &str) -> AppResult<Vec<Entity>> {
        tracing::debug!(model_id = %self.model_id, "extracting entities");
        let response = self.platform.run(&self.model_id, json!({ "text": text })).await?;
        let entities = parse_entity_details(text, &response.details);
        tracing::debug!(count = entities.len(), "entity extraction completed");
        Ok(entities)
    }
}

/// Slice entity spans out of the source text by code-point offsets
fn parse_entity_details(text: &str, details: &[Value]) -> Vec<Entity> {
    details
        .iter()
        .filter_map(|detail| serde_json::from_value::<NerDetail>(detail.clone()).ok())
        .filter_map(|detail| {
            let NerSpan { start, end } = detail.bounding_box;
            if end < start {
                return None;
            }
            let span: String = text.chars().skip(start).take(end - start).collect();
            if span.is_empty() {
                return None;
            }
            Some(Entity {
                text: span,
                label: detail.data,
            })
        })
        .collect()
}

/// Language-generation model
#[derive(Clone)]
pub struct LlmModel {
    platform: PlatformClient,
    model_id: String,
}

impl LlmModel {
    pub fn new(platform: PlatformClient, model_id: String) -> Self {
        Self { platform, model_id }
    }

    /// Generate text for a prompt
    ///
    /// `long_context` requests a larger completion budget, used for
    /// report-style outputs such as irrigation plans.
    pub async fn generate(&self, text: &str, long_context: bool) -> AppResult<String> {
        tracing::debug!(model_id = %self.model_id, long_context, "generating response");
        // The platform expects max_tokens as a string
        let max_tokens = if long_context { "1024" } else { "64" };
        let response = self
            .platform
            .run(
                &self.model_id,
                json!({
                    "text": text,
                    "max_tokens": max_tokens,
                }),
            )
            .await?;
        response.text_data()
    }
}

/// Speech synthesis model
#[derive(Clone)]
pub struct TtsModel {
    platform: PlatformClient,
    model_id: String,
}

impl TtsModel {
    pub fn new(platform: PlatformClient, model_id: String) -> Self {
        Self { platform, model_id }
    }

    /// Synthesize speech for text; returns a reference (URL) to the audio
    pub async fn synthesize(&self, text: &str) -> AppResult<String> {
        tracing::debug!(model_id = %self.model_id, "synthesizing speech");
        let response = self.platform.run(&self.model_id, json!({ "text": text })).await?;
        response.text_data()
    }
}

/// The full set of hosted models the service depends on
#[derive(Clone)]
pub struct ModelSet {
    pub asr: AsrModel,
    pub ner: NerModel,
    pub llm: LlmModel,
    pub tts: TtsModel,
}

impl ModelSet {
    /// Build all model handles and verify them concurrently
    ///
    /// One-shot fan-out/fan-in at startup: all four models are checked
    /// against the platform and joined before the server accepts traffic.
    pub async fn connect(platform: PlatformClient, config: &PlatformConfig) -> AppResult<Self> {
        tokio::try_join!(
            platform.describe(&config.asr_model_id),
            platform.describe(&config.ner_model_id),
            platform.describe(&config.llm_model_id),
            platform.describe(&config.tts_model_id),
        )?;

        Ok(Self {
            asr: AsrModel::new(platform.clone(), config.asr_model_id.clone()),
            ner: NerModel::new(platform.clone(), config.ner_model_id.clone()),
            llm: LlmModel::new(platform.clone(), config.llm_model_id.clone()),
            tts: TtsModel::new(platform, config.tts_model_id.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_details() {
        let text = "use fertilizer and irrigation wisely";
        let details = vec![
            json!({"boundingBox": {"start": 4, "end": 14}, "data": "Product"}),
            json!({"boundingBox": {"start": 19, "end": 29}, "data": "Skill"}),
        ];
        let entities = parse_entity_details(text, &details);
        assert_eq!(
            entities,
            vec![
                Entity {
                    text: "fertilizer".to_string(),
                    label: "Product".to_string()
                },
                Entity {
                    text: "irrigation".to_string(),
                    label: "Skill".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_entity_details_skips_malformed_spans() {
        let text = "short";
        let details = vec![
            json!({"boundingBox": {"start": 3, "end": 1}, "data": "Broken"}),
            json!({"data": "NoSpan"}),
            json!({"boundingBox": {"start": 10, "end": 20}, "data": "OutOfRange"}),
        ];
        let entities = parse_entity_details(text, &details);
        assert!(entities.is_empty());
    }

    #[test]
    fn test_text_data_rejects_non_string_payload() {
        let response = ModelRunResponse {
            status: None,
            data: json!({"unexpected": true}),
            details: vec![],
        };
        assert!(response.text_data().is_err());
    }

    #[test]
    fn test_run_response_envelope_parsing() {
        let body = r#"{
            "status": "SUCCESS",
            "data": "Hello. What is my name?",
            "details": []
        }"#;
        let parsed: ModelRunResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status.as_deref(), Some("SUCCESS"));
        assert_eq!(parsed.text_data().unwrap(), "Hello. What is my name?");
    }
}
