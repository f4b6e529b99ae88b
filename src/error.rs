//! Error handling module for Wayfarer
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for Wayfarer
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// An answer outside the allowed enumeration for a question, a question
    /// answered twice, or an answer recorded after the session completed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The resolver was invoked before all three answers exist.
    #[error("Incomplete input: {0}")]
    IncompleteInput(String),

    /// IO errors (rules file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rule table content errors (duplicates, empty fallback)
    #[error("Rules error: {0}")]
    Rules(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for Wayfarer operations
pub type Result<T> = std::result::Result<T, WayfarerError>;

// Convenient error constructors
impl WayfarerError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an incomplete input error
    pub fn incomplete_input(msg: impl Into<String>) -> Self {
        Self::IncompleteInput(msg.into())
    }

    /// Create a rules error
    pub fn rules(msg: impl Into<String>) -> Self {
        Self::Rules(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WayfarerError::invalid_input("'Desert' is not a terrain preference");
        assert_eq!(
            err.to_string(),
            "Invalid input: 'Desert' is not a terrain preference"
        );

        let err = WayfarerError::incomplete_input("budget not answered");
        assert_eq!(err.to_string(), "Incomplete input: budget not answered");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WayfarerError = io_err.into();
        assert!(matches!(err, WayfarerError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = WayfarerError::rules("duplicate rule");
        assert!(matches!(err, WayfarerError::Rules(_)));

        let err = WayfarerError::terminal("raw mode failed");
        assert!(matches!(err, WayfarerError::Terminal(_)));
    }
}
