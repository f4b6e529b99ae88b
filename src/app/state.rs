//! Application state definitions
//!
//! Contains all state-related types for the application. Rendering is a pure
//! function of `AppState`; transitions happen only in the app event handler.

use crate::collector::ChoiceCollector;
use crate::rules::RuleTable;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Asking one of the three questions
    Question,
    /// Showing the recommendation for a completed session
    Result,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The questionnaire session state machine
    pub collector: ChoiceCollector,
    /// Rule table used to resolve completed sessions
    pub rules: RuleTable,
    /// Highlighted option index for the active question
    pub option_selection: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Recommendation for the completed session, if any
    pub recommendation: Option<String>,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl AppState {
    /// Create state with a custom rule table.
    pub fn with_rules(rules: RuleTable) -> Self {
        Self {
            mode: AppMode::Question,
            collector: ChoiceCollector::new(),
            rules,
            option_selection: 0,
            status_message: "Answer three questions to find your destination".to_string(),
            recommendation: None,
            help_visible: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_rules(RuleTable::default())
    }
}
