//! Shared types and models for the AgriVoice platform
//!
//! This crate contains the domain types, the irrigation calculator, and
//! validation helpers shared between the backend and other components.

pub mod irrigation;
pub mod models;
pub mod types;
pub mod validation;

pub use irrigation::*;
pub use models::*;
pub use types::*;
pub use validation::*;
