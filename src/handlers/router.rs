//! Command router
//!
//! Maps an inbound message to its handler using the sender's conversation
//! state and the parsed input. Recognized commands win in every state; free
//! text continues whatever flow the sender is in.

use tracing::debug;
use crate::handlers::commands::{admin, help, survey, Command};
use crate::handlers::context::AppContext;
use crate::handlers::Replies;
use crate::models::IncomingMessage;
use crate::state::ConversationState;
use crate::utils::errors::Result;

/// Parsed form of an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Text,
}

impl Input {
    pub fn parse(msg: &IncomingMessage, bot_username: &str) -> Self {
        match Command::from_text(&msg.text, bot_username) {
            Some(command) => Input::Command(command),
            None => Input::Text,
        }
    }
}

/// Handle one inbound message and return the replies for its chat
pub async fn dispatch(ctx: &AppContext, msg: &IncomingMessage) -> Result<Replies> {
    let key = ctx.conversation_key(msg);
    let state = ctx.states.get(&key).await;
    let input = Input::parse(msg, &ctx.bot_username);

    debug!(
        user_id = msg.user_id,
        chat_id = msg.chat_id,
        state = state.name(),
        input = ?input,
        "Dispatching message"
    );

    match (state, input) {
        (_, Input::Command(Command::Start)) => survey::handle_start(ctx, msg).await,
        (_, Input::Command(Command::Help)) => Ok(help::handle_help(ctx, msg)),
        (_, Input::Command(Command::Admin)) => admin::handle_admin_panel(ctx, msg).await,
        (_, Input::Command(Command::AddQuestion)) => admin::handle_add_question(ctx, msg).await,
        (_, Input::Command(Command::DeleteQuestion)) => admin::handle_delete_question(ctx, msg).await,
        (_, Input::Command(Command::ShowQuestions)) => admin::handle_show_questions(ctx, msg).await,
        (ConversationState::AwaitingNewQuestion, Input::Text) => admin::process_new_question(ctx, msg).await,
        (ConversationState::AwaitingDeleteIndex, Input::Text) => admin::process_delete_index(ctx, msg).await,
        (ConversationState::InSurvey { current_question, answers }, Input::Text) => {
            survey::process_answer(ctx, msg, current_question, answers).await
        }
        (ConversationState::Idle, Input::Text) => Ok(handle_idle_text(ctx, msg)),
    }
}

/// Free text outside any flow: point private chats at /start, stay quiet in groups
fn handle_idle_text(ctx: &AppContext, msg: &IncomingMessage) -> Replies {
    if !msg.is_private_chat() {
        return Vec::new();
    }

    let lang = ctx.language_for(msg);
    vec![ctx.i18n.t("messages.use_start", &lang, None)]
}
