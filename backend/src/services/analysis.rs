//! Water-conservation practice analyzer
//!
//! Sends the conversation history to the language model with a
//! schema-constrained prompt and parses the reply into a fixed record of
//! traditional/modern practice comparisons. Any failure along the way is
//! logged and yields an absent result.

use shared::{ConservationAnalysis, ConversationTurn};

use crate::external::LlmModel;

/// Declared response fields, paired with their descriptions for the
/// format instructions that accompany the prompt
const RESPONSE_SCHEMA: [(&str, &str); 6] = [
    (
        "traditional_practice",
        "A list of top 3 traditional water conservation practices",
    ),
    (
        "traditional_efficiency",
        "A list of efficiency ratings for the traditional practices",
    ),
    (
        "traditional_description",
        "A list of descriptions of the traditional water conservation methods",
    ),
    (
        "modern_practice",
        "A list of modern water conservation practices that improve upon the traditional ones",
    ),
    (
        "improved_efficiency",
        "A list of improved efficiency ratings of the modern methods compared to the traditional ones",
    ),
    (
        "modern_description",
        "A list of descriptions of the modern water conservation techniques",
    ),
];

/// Schema-constrained analyzer over the hosted language model
pub struct ConservationAnalyzer {
    llm: LlmModel,
}

impl ConservationAnalyzer {
    pub fn new(llm: LlmModel) -> Self {
        Self { llm }
    }

    /// Analyze the conversation so far; `None` when the model call fails
    /// or its output does not match the declared schema
    pub async fn analyze(&self, history: &[ConversationTurn]) -> Option<ConservationAnalysis> {
        let prompt = compose_analysis_prompt(history);

        let reply = match self.llm.generate(&prompt, true).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("conservation analysis model call failed: {}", e);
                return None;
            }
        };

        match ConservationAnalysis::from_model_reply(&reply) {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                tracing::error!("conservation analysis parse failed: {}", e);
                None
            }
        }
    }
}

/// Build the analysis prompt: guidelines, the history as the input
/// problem, and the format instructions
fn compose_analysis_prompt(history: &[ConversationTurn]) -> String {
    let problem: String = history
        .iter()
        .map(|turn| {
            let speaker = match turn.speaker {
                shared::Speaker::User => "User",
                shared::Speaker::Assistant => "Assistant",
            };
            format!("{}: {}\n", speaker, turn.text)
        })
        .collect();

    format!(
        "The input problem consists of the conversational history of the user. \
         Based on that, analyze and compare the top 3 traditional and modern \
         water conservation practices to address cultural resistance.\n\
         \n\
         Guidelines:\n\
         - Identify the top 3 traditional water conservation methods\n\
         - Provide their efficiency ratings and a brief description\n\
         - Compare them to modern techniques that improve upon them\n\
         - Explain the improved efficiency and describe the modern methods\n\
         \n\
         Input problem: {problem}\n\
         \n\
         {format_instructions}",
        problem = problem,
        format_instructions = format_instructions(),
    )
}

/// Format instructions demanding a fenced ```json block with the six
/// declared fields
fn format_instructions() -> String {
    let fields: String = RESPONSE_SCHEMA
        .iter()
        .map(|(name, description)| format!("\t\"{}\": [string]  // {}\n", name, description))
        .collect();

    format!(
        "The output should be a markdown code snippet formatted in the \
         following schema, including the leading and trailing \"```json\" \
         and \"```\":\n\
         \n\
         ```json\n\
         {{\n{fields}}}\n\
         ```",
        fields = fields
    )
}
