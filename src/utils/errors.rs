//! Error handling for SurveyBot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for SurveyBot application
#[derive(Error, Debug)]
pub enum SurveyBotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Google Sheets error: {0}")]
    Sheets(#[from] SheetsError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Token signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Google Sheets API specific errors
#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(String),

    #[error("Authentication failed ({status}): {message}")]
    AuthenticationFailed { status: u16, message: String },

    #[error("Sheets API returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Result type alias for SurveyBot operations
pub type Result<T> = std::result::Result<T, SurveyBotError>;

impl SurveyBotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SurveyBotError::Telegram(_) => true,
            SurveyBotError::Sheets(SheetsError::InvalidCredentials(_)) => false,
            SurveyBotError::Sheets(_) => true,
            SurveyBotError::Config(_) => false,
            SurveyBotError::ConfigLoad(_) => false,
            SurveyBotError::Http(_) => true,
            SurveyBotError::Serialization(_) => false,
            SurveyBotError::Jwt(_) => false,
            SurveyBotError::Io(_) => true,
            SurveyBotError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SurveyBotError::Config(_) => ErrorSeverity::Critical,
            SurveyBotError::ConfigLoad(_) => ErrorSeverity::Critical,
            SurveyBotError::Jwt(_) => ErrorSeverity::Critical,
            SurveyBotError::Sheets(SheetsError::InvalidCredentials(_)) => ErrorSeverity::Critical,
            SurveyBotError::InvalidInput(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_errors_are_fatal() {
        let err = SurveyBotError::from(SheetsError::InvalidCredentials("missing private_key".to_string()));
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_api_errors_are_recoverable() {
        let err = SurveyBotError::from(SheetsError::Api {
            status: 503,
            message: "backend unavailable".to_string(),
        });
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.to_string(), "Google Sheets error: Sheets API returned 503: backend unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: SurveyBotError = io.into();
        assert!(matches!(err, SurveyBotError::Io(_)));
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_invalid_input_is_a_warning() {
        let err = SurveyBotError::InvalidInput("question text is empty".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.severity().to_string(), "WARN");
    }
}
