//! Persistent storage module
//!
//! Holds the question list, the only data the bot keeps on disk.

pub mod questions;

pub use questions::QuestionStore;
