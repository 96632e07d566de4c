//! SurveyBot Telegram Bot
//!
//! A Telegram bot that walks users through an admin-editable questionnaire
//! and appends every completed response set as a row to a Google Sheet.
//! The library exposes the conversation flow independently of the Telegram
//! transport so it can be driven directly in tests.

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod storage;
pub mod state;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{SurveyBotError, Result};

// Re-export main components for easy access
pub use handlers::AppContext;
pub use i18n::I18n;
pub use services::{GoogleSheetsService, ResponseSink};
pub use state::{ConversationKey, ConversationState, StateStorage};
pub use storage::QuestionStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
