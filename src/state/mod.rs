//! State management module
//!
//! This module handles per-user conversation state

pub mod context;
pub mod storage;

// Re-export commonly used state components
pub use context::{ConversationKey, ConversationState};
pub use storage::StateStorage;
