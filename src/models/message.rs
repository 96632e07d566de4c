//! Inbound message model

/// A text message as seen by the command router, independent of the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub user_id: i64,
    pub text: String,
    /// IETF language tag reported by the client, e.g. "en-US"
    pub language_code: Option<String>,
}

impl IncomingMessage {
    pub fn new(chat_id: i64, user_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            user_id,
            text: text.into(),
            language_code: None,
        }
    }

    pub fn with_language(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }

    /// Telegram private chats have positive ids, groups and channels negative
    pub fn is_private_chat(&self) -> bool {
        self.chat_id > 0
    }

    /// Build from a Telegram message; `None` when it has no sender or no text
    pub fn from_telegram(msg: &teloxide::types::Message) -> Option<Self> {
        let user = msg.from.as_ref()?;
        let text = msg.text()?;

        Some(Self {
            chat_id: msg.chat.id.0,
            user_id: user.id.0 as i64,
            text: text.to_string(),
            language_code: user.language_code.clone(),
        })
    }
}
