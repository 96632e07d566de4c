//! Bot handlers module
//!
//! This module contains all bot handlers organized by type:
//! - Command handlers for admin and survey commands
//! - The router choosing a handler from conversation state and input
//! - The Telegram message handler that sends replies

pub mod commands;
pub mod context;
pub mod messages;
pub mod router;

// Re-export commonly used handler types
pub use commands::Command;
pub use context::AppContext;
pub use messages::handle_message;
pub use router::dispatch;

/// Reply texts for the chat a message came from, in sending order
pub type Replies = Vec<String>;
