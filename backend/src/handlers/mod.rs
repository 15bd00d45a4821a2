//! HTTP handlers for the AgriVoice backend

pub mod analysis;
pub mod assistant;
pub mod health;
pub mod irrigation;
pub mod practices;

pub use analysis::water_analysis;
pub use assistant::{
    assistant_response, chat_response, clear_conversation_history, get_conversation_history,
};
pub use health::health_check;
pub use irrigation::irrigation_plan;
pub use practices::predict_festival_practice;
