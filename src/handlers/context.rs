//! Handler context
//!
//! Everything a handler needs, bundled so it can be registered once with the
//! dispatcher and passed by reference into every handler.

use std::sync::Arc;
use tokio::sync::RwLock;
use crate::i18n::I18n;
use crate::models::IncomingMessage;
use crate::services::ResponseSink;
use crate::state::{ConversationKey, StateStorage};
use crate::storage::QuestionStore;

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    /// Telegram id of this bot, part of every conversation key
    pub bot_id: u64,
    /// Username used to accept `/command@username` forms
    pub bot_username: String,
    pub admin_id: i64,
    pub questions: Arc<RwLock<QuestionStore>>,
    pub states: StateStorage,
    pub sink: Arc<dyn ResponseSink>,
    pub i18n: Arc<I18n>,
}

impl AppContext {
    pub fn new(
        bot_id: u64,
        bot_username: impl Into<String>,
        admin_id: i64,
        questions: QuestionStore,
        sink: Arc<dyn ResponseSink>,
        i18n: I18n,
    ) -> Self {
        Self {
            bot_id,
            bot_username: bot_username.into(),
            admin_id,
            questions: Arc::new(RwLock::new(questions)),
            states: StateStorage::new(),
            sink,
            i18n: Arc::new(i18n),
        }
    }

    pub fn is_admin(&self, user_id: i64) -> bool {
        user_id == self.admin_id
    }

    pub fn conversation_key(&self, msg: &IncomingMessage) -> ConversationKey {
        ConversationKey::new(self.bot_id, msg.chat_id, msg.user_id)
    }

    /// Reply language for the sender of `msg`
    pub fn language_for(&self, msg: &IncomingMessage) -> String {
        self.i18n.detect_user_language(msg.language_code.as_deref())
    }
}
