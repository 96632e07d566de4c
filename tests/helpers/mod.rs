//! Test helpers module
//!
//! Builds an [`AppContext`] around a temporary question file and an
//! in-memory response sink so conversations can be driven without Telegram
//! or Google.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use tempfile::TempDir;

use survey_bot::config::I18nConfig;
use survey_bot::handlers::{dispatch, AppContext};
use survey_bot::models::{IncomingMessage, ResponseRow};
use survey_bot::utils::errors::{SheetsError, Result};
use survey_bot::{ConversationKey, ConversationState, I18n, QuestionStore, ResponseSink};

pub const TEST_BOT_ID: u64 = 5550001;
pub const TEST_BOT_USERNAME: &str = "survey_test_bot";
pub const ADMIN_ID: i64 = 111111;
pub const USER_ID: i64 = 222222;
pub const OTHER_USER_ID: i64 = 333333;

/// Response sink that keeps rows in memory and can be told to fail
#[derive(Default)]
pub struct RecordingSink {
    rows: Mutex<Vec<ResponseRow>>,
    failing: AtomicBool,
}

impl RecordingSink {
    pub fn rows(&self) -> Vec<ResponseRow> {
        self.rows.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ResponseSink for RecordingSink {
    async fn append_row(&self, row: &ResponseRow) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SheetsError::Api {
                status: 503,
                message: "unavailable".to_string(),
            }
            .into());
        }

        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }
}

/// Conversation test harness
pub struct TestBot {
    pub ctx: AppContext,
    pub sink: Arc<RecordingSink>,
    pub questions_path: PathBuf,
    _temp_dir: TempDir,
}

pub fn english_i18n() -> I18n {
    I18n::bundled(&I18nConfig {
        default_language: "en".to_string(),
        supported_languages: vec!["en".to_string(), "ru".to_string()],
        translations_dir: "translations".to_string(),
    })
    .expect("bundled translations")
}

impl TestBot {
    /// Bot whose question file initially holds `questions`
    pub async fn with_questions(questions: &[&str]) -> Self {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let questions_path = temp_dir.path().join("questions.txt");

        if !questions.is_empty() {
            let content: String = questions.iter().map(|q| format!("{}\n", q)).collect();
            std::fs::write(&questions_path, content).expect("write questions");
        }

        let store = QuestionStore::open(&questions_path).await.expect("open store");
        let sink = Arc::new(RecordingSink::default());
        let ctx = AppContext::new(
            TEST_BOT_ID,
            TEST_BOT_USERNAME,
            ADMIN_ID,
            store,
            sink.clone(),
            english_i18n(),
        );

        Self {
            ctx,
            sink,
            questions_path,
            _temp_dir: temp_dir,
        }
    }

    pub async fn empty() -> Self {
        Self::with_questions(&[]).await
    }

    /// Send `text` from `user_id` in their private chat
    pub async fn send(&self, user_id: i64, text: &str) -> Vec<String> {
        self.try_send(user_id, text).await.expect("dispatch failed")
    }

    pub async fn try_send(&self, user_id: i64, text: &str) -> Result<Vec<String>> {
        dispatch(&self.ctx, &IncomingMessage::new(user_id, user_id, text)).await
    }

    /// Send `text` from `user_id` in chat `chat_id`
    pub async fn send_in_chat(&self, chat_id: i64, user_id: i64, text: &str) -> Vec<String> {
        dispatch(&self.ctx, &IncomingMessage::new(chat_id, user_id, text))
            .await
            .expect("dispatch failed")
    }

    pub async fn state_of(&self, user_id: i64) -> ConversationState {
        self.state_in_chat(user_id, user_id).await
    }

    pub async fn state_in_chat(&self, chat_id: i64, user_id: i64) -> ConversationState {
        self.ctx
            .states
            .get(&ConversationKey::new(TEST_BOT_ID, chat_id, user_id))
            .await
    }

    pub async fn questions(&self) -> Vec<String> {
        self.ctx.questions.read().await.questions().to_vec()
    }

    /// Questions as currently persisted on disk
    pub async fn persisted_questions(&self) -> Vec<String> {
        QuestionStore::load(&self.questions_path).await.expect("load questions")
    }
}
