//! Conversation context
//!
//! Per-user conversation state and the composite key it is stored under.

use std::fmt;

/// Identifies one conversation: a user talking to a bot in a specific chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationKey {
    pub bot_id: u64,
    pub chat_id: i64,
    pub user_id: i64,
}

impl ConversationKey {
    pub fn new(bot_id: u64, chat_id: i64, user_id: i64) -> Self {
        Self { bot_id, chat_id, user_id }
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.bot_id, self.chat_id, self.user_id)
    }
}

/// Where a user currently is in a multi-step conversation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    /// Admin has asked to add a question; next text is the question
    AwaitingNewQuestion,
    /// Admin has asked to delete a question; next text is its number
    AwaitingDeleteIndex,
    /// User is answering the questionnaire
    ///
    /// `answers.len() == current_question` at all times: an answer is
    /// recorded before the index advances.
    InSurvey {
        current_question: usize,
        answers: Vec<String>,
    },
}

impl ConversationState {
    /// Fresh survey positioned on the first question
    pub fn new_survey() -> Self {
        ConversationState::InSurvey {
            current_question: 0,
            answers: Vec::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ConversationState::Idle)
    }

    /// Short name used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::AwaitingNewQuestion => "awaiting_new_question",
            ConversationState::AwaitingDeleteIndex => "awaiting_delete_index",
            ConversationState::InSurvey { .. } => "in_survey",
        }
    }
}
