//! State storage implementation
//!
//! In-memory conversation state keyed by [`ConversationKey`]. A key that is
//! not present is treated as [`ConversationState::Idle`], so clearing a
//! conversation simply removes its entry.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use super::context::{ConversationKey, ConversationState};

/// Shared in-memory state storage
#[derive(Debug, Clone, Default)]
pub struct StateStorage {
    states: Arc<Mutex<HashMap<ConversationKey, ConversationState>>>,
}

impl StateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for `key`, `Idle` if none was stored
    pub async fn get(&self, key: &ConversationKey) -> ConversationState {
        let states = self.states.lock().await;
        states.get(key).cloned().unwrap_or_default()
    }

    /// Store `state` for `key`; storing `Idle` clears the entry
    pub async fn set(&self, key: ConversationKey, state: ConversationState) {
        if state.is_idle() {
            self.clear(&key).await;
            return;
        }

        debug!(conversation = %key, state = state.name(), "Saving conversation state");
        let mut states = self.states.lock().await;
        states.insert(key, state);
    }

    /// Reset the conversation to `Idle`, dropping any transient data
    pub async fn clear(&self, key: &ConversationKey) {
        let mut states = self.states.lock().await;
        if states.remove(key).is_some() {
            debug!(conversation = %key, "Cleared conversation state");
        }
    }

    /// Number of conversations currently outside `Idle`
    pub async fn active_conversations(&self) -> usize {
        self.states.lock().await.len()
    }
}
