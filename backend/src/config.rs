//! Configuration management for the AgriVoice backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather and geocoding API configuration
    pub weather: WeatherConfig,

    /// Hosted model platform configuration
    pub platform: PlatformConfig,

    /// Conversational assistant configuration
    pub assistant: AssistantConfig,

    /// Offline festival/practice classifier configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Current-weather API endpoint
    pub api_endpoint: String,

    /// Reverse-geocoding API endpoint
    pub geocoding_endpoint: String,

    /// API key shared by both endpoints
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlatformConfig {
    /// Model platform API endpoint
    pub api_endpoint: String,

    /// Platform access key
    pub api_key: String,

    /// Speech recognition model ID
    pub asr_model_id: String,

    /// Named entity recognition model ID
    pub ner_model_id: String,

    /// Language model ID
    pub llm_model_id: String,

    /// Speech synthesis model ID
    pub tts_model_id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Number of user/assistant exchanges kept as conversational context
    pub memory_window: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClassifierConfig {
    /// Endpoint of the festival/practice classifier service, if deployed
    pub api_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 7000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "weather.api_endpoint",
                "https://api.openweathermap.org/data/2.5",
            )?
            .set_default(
                "weather.geocoding_endpoint",
                "http://api.openweathermap.org/geo/1.0",
            )?
            .set_default(
                "platform.api_endpoint",
                "https://models.aixplain.com/api/v1",
            )?
            // Hosted model IDs: English ASR, Azure NER, Llama 3.3 70B, Google TTS
            .set_default("platform.asr_model_id", "65eee94812ee0172b4a9a6f7")?
            .set_default("platform.ner_model_id", "60ddefbc8d38c51c5885f8ba")?
            .set_default("platform.llm_model_id", "677c16166eb563bb611623c1")?
            .set_default("platform.tts_model_id", "6171efb6159531495cadf03d")?
            .set_default("assistant.memory_window", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 7000,
            host: "0.0.0.0".to_string(),
        }
    }
}
