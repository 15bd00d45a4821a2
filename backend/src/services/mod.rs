//! Business logic services for the AgriVoice backend

pub mod analysis;
pub mod assistant;
pub mod irrigation;
pub mod practices;

pub use analysis::ConservationAnalyzer;
pub use assistant::Assistant;
pub use irrigation::IrrigationPlanner;
pub use practices::PracticeClassifier;
