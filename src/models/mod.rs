//! Data models module
//!
//! This module contains the data structures passed between the transport,
//! the handlers and the response sink

pub mod message;
pub mod response;

// Re-export commonly used models
pub use message::IncomingMessage;
pub use response::ResponseRow;
