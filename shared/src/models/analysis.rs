//! Water-conservation analysis models

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Comparison of traditional and modern water-conservation practices
///
/// Six parallel lists: index i of each list describes the same practice
/// pairing. Produced by schema-constrained language-model output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConservationAnalysis {
    /// Top traditional water conservation practices
    pub traditional_practice: Vec<String>,
    /// Efficiency ratings of the traditional practices
    pub traditional_efficiency: Vec<String>,
    /// Descriptions of the traditional methods
    pub traditional_description: Vec<String>,
    /// Modern practices improving on the traditional ones
    pub modern_practice: Vec<String>,
    /// Improved efficiency ratings of the modern methods
    pub improved_efficiency: Vec<String>,
    /// Descriptions of the modern techniques
    pub modern_description: Vec<String>,
}

/// Failure to extract a structured analysis from generated text
#[derive(Debug, Error)]
pub enum StructuredOutputError {
    #[error("no JSON block found in model reply")]
    MissingJsonBlock,
    #[error("model reply did not match the declared schema: {0}")]
    SchemaMismatch(#[from] serde_json::Error),
}

impl ConservationAnalysis {
    /// Parse a model reply containing a fenced ```json block into the
    /// declared six-field schema
    ///
    /// Accepts a bare JSON object as well, since models occasionally omit
    /// the fence despite the format instructions.
    pub fn from_model_reply(reply: &str) -> Result<Self, StructuredOutputError> {
        let json = extract_json_block(reply)?;
        Ok(serde_json::from_str(json)?)
    }
}

/// Locate the JSON payload inside a model reply
fn extract_json_block(reply: &str) -> Result<&str, StructuredOutputError> {
    for fence in ["```json", "```"] {
        if let Some(start) = reply.find(fence) {
            let body = &reply[start + fence.len()..];
            if let Some(end) = body.find("```") {
                return Ok(body[..end].trim());
            }
        }
    }
    let trimmed = reply.trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed);
    }
    Err(StructuredOutputError::MissingJsonBlock)
}

/// An entity span extracted by the named-entity-recognition service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    /// The text span the entity covers
    pub text: String,
    /// Entity label, e.g. "Product" or "Skill"
    pub label: String,
}
