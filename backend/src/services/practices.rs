//! Festival/practice classifier client
//!
//! The classifier itself is an offline model served elsewhere; this
//! service forwards transcripts to it and passes the predicted labels
//! back.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, AppResult};

/// Predicted festival and cultural practice labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticePrediction {
    pub festival: String,
    pub practice: String,
}

/// Client for the festival/practice classifier service
#[derive(Clone)]
pub struct PracticeClassifier {
    client: Client,
    api_endpoint: Option<String>,
}

impl PracticeClassifier {
    pub fn new(api_endpoint: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_endpoint,
        }
    }

    /// Predict festival and practice labels for a transcript
    pub async fn predict(&self, transcript: &str) -> AppResult<PracticePrediction> {
        let endpoint = self
            .api_endpoint
            .as_deref()
            .ok_or(AppError::ClassifierUnavailable)?;

        let response = self
            .client
            .post(endpoint)
            .json(&json!({ "transcript": transcript }))
            .send()
            .await
            .map_err(|e| AppError::ClassifierApi(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ClassifierApi(format!(
                "classifier returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ClassifierApi(format!("failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_classifier_is_an_error() {
        let classifier = PracticeClassifier::new(None);
        let result = classifier.predict("During Holi we clean water bodies").await;
        assert!(matches!(result, Err(AppError::ClassifierUnavailable)));
    }

    #[test]
    fn test_prediction_parsing() {
        let body = r#"{"festival": "Holi", "practice": "cleaning water bodies"}"#;
        let prediction: PracticePrediction = serde_json::from_str(body).unwrap();
        assert_eq!(prediction.festival, "Holi");
        assert_eq!(prediction.practice, "cleaning water bodies");
    }
}
