//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /admin, etc.

pub mod admin;
pub mod help;
pub mod survey;

use teloxide::utils::command::BotCommands;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case", description = "Survey bot commands:")]
pub enum Command {
    #[command(description = "Take the survey")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Admin panel (admin only)")]
    Admin,
    #[command(description = "Add a question (admin only)")]
    AddQuestion,
    #[command(description = "Delete a question (admin only)")]
    DeleteQuestion,
    #[command(description = "Show all questions (admin only)")]
    ShowQuestions,
}

impl Command {
    /// Parse the leading `/command` of a message
    ///
    /// Anything after the first whitespace is ignored, so deep links such as
    /// `/start campaign42` still start the survey. Unknown commands and
    /// commands addressed to another bot yield `None` and are treated as
    /// ordinary text.
    pub fn from_text(text: &str, bot_username: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        if !first.starts_with('/') {
            return None;
        }

        Command::parse(first, bot_username).ok()
    }
}
