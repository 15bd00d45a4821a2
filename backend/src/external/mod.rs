//! External API integrations

pub mod platform;
pub mod weather;

pub use platform::{AsrModel, LlmModel, ModelSet, NerModel, PlatformClient, TtsModel};
pub use weather::WeatherClient;
