//! Domain models for the AgriVoice platform

pub mod analysis;
pub mod conversation;
pub mod soil;
pub mod weather;

pub use analysis::{ConservationAnalysis, Entity, StructuredOutputError};
pub use conversation::{ConversationTurn, ConversationWindow, Speaker};
pub use soil::{base_water_need, SoilType, DEFAULT_BASE_WATER_NEED};
pub use weather::WeatherObservation;
