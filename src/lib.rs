//! Wayfarer Library
//!
//! Core functionality for the travel destination finder: the questionnaire
//! state machine, the recommendation resolver, and the TUI that drives them.

pub mod app;
pub mod cli;
pub mod collector;
pub mod error;
pub mod logic;
pub mod rules;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use collector::{ChoiceCollector, ChoiceSet, SessionPhase};
pub use error::{Result, WayfarerError};
pub use logic::resolver::resolve;
pub use rules::{RecommendationRule, RuleTable};
pub use types::{Answer, ActivityPreference, BudgetLevel, QuestionKey, TerrainPreference};
