//! Admin command handlers
//!
//! Question management: listing, adding and deleting questions. Every entry
//! command checks the sender against the configured admin id first.

use tracing::{debug, info, warn};
use crate::handlers::context::AppContext;
use crate::handlers::Replies;
use crate::models::IncomingMessage;
use crate::state::ConversationState;
use crate::utils::errors::{Result, SurveyBotError};
use crate::utils::helpers::{format_numbered_list, parse_question_number, QuestionNumber};
use crate::utils::logging::log_admin_action;

/// Denial reply for non-admin senders, `None` when the sender is the admin
fn deny_unless_admin(ctx: &AppContext, msg: &IncomingMessage, command: &str) -> Option<Replies> {
    if ctx.is_admin(msg.user_id) {
        return None;
    }

    warn!(user_id = msg.user_id, command = command, "Unauthorized admin command");
    let lang = ctx.language_for(msg);
    Some(vec![ctx.i18n.t("admin.access_denied", &lang, None)])
}

/// Handle /admin command - show admin panel
pub async fn handle_admin_panel(ctx: &AppContext, msg: &IncomingMessage) -> Result<Replies> {
    if let Some(denied) = deny_unless_admin(ctx, msg, "admin") {
        return Ok(denied);
    }

    debug!(user_id = msg.user_id, "Showing admin panel");
    let lang = ctx.language_for(msg);
    Ok(vec![ctx.i18n.t("admin.panel", &lang, None)])
}

/// Handle /add_question command - wait for the question text
pub async fn handle_add_question(ctx: &AppContext, msg: &IncomingMessage) -> Result<Replies> {
    if let Some(denied) = deny_unless_admin(ctx, msg, "add_question") {
        return Ok(denied);
    }

    let key = ctx.conversation_key(msg);
    ctx.states.set(key, ConversationState::AwaitingNewQuestion).await;

    let lang = ctx.language_for(msg);
    Ok(vec![ctx.i18n.t("admin.ask_new_question", &lang, None)])
}

/// Store the text sent after /add_question as a new question
pub async fn process_new_question(ctx: &AppContext, msg: &IncomingMessage) -> Result<Replies> {
    let key = ctx.conversation_key(msg);
    let lang = ctx.language_for(msg);
    let appended = ctx.questions.write().await.append(&msg.text).await;

    match appended {
        Ok(question) => {
            ctx.states.clear(&key).await;
            log_admin_action(msg.user_id, "add_question", Some(&question));
            Ok(vec![ctx.i18n.t_with("admin.question_added", &lang, "question", &question)])
        }
        Err(SurveyBotError::InvalidInput(_)) => {
            ctx.states.clear(&key).await;
            Ok(vec![ctx.i18n.t("admin.question_empty", &lang, None)])
        }
        Err(e) => Err(e),
    }
}

/// Handle /delete_question command - list questions and wait for a number
pub async fn handle_delete_question(ctx: &AppContext, msg: &IncomingMessage) -> Result<Replies> {
    if let Some(denied) = deny_unless_admin(ctx, msg, "delete_question") {
        return Ok(denied);
    }

    let lang = ctx.language_for(msg);
    let listing = {
        let questions = ctx.questions.read().await;
        if questions.is_empty() {
            return Ok(vec![ctx.i18n.t("admin.list_empty", &lang, None)]);
        }
        format_numbered_list(questions.questions())
    };

    let key = ctx.conversation_key(msg);
    ctx.states.set(key, ConversationState::AwaitingDeleteIndex).await;

    Ok(vec![ctx.i18n.t_with("admin.choose_delete", &lang, "questions", &listing)])
}

/// Delete the question whose 1-based number was sent after /delete_question
///
/// The conversation returns to idle whether or not the number was valid.
pub async fn process_delete_index(ctx: &AppContext, msg: &IncomingMessage) -> Result<Replies> {
    let key = ctx.conversation_key(msg);
    let lang = ctx.language_for(msg);
    ctx.states.clear(&key).await;

    let index = match parse_question_number(&msg.text) {
        QuestionNumber::Index(index) => index,
        QuestionNumber::OutOfRange => {
            return Ok(vec![ctx.i18n.t("admin.invalid_number", &lang, None)]);
        }
        QuestionNumber::NotANumber => {
            return Ok(vec![ctx.i18n.t("admin.not_a_number", &lang, None)]);
        }
    };

    let removed = ctx.questions.write().await.remove_at(index).await?;
    match removed {
        Some(question) => {
            log_admin_action(msg.user_id, "delete_question", Some(&question));
            Ok(vec![ctx.i18n.t_with("admin.question_deleted", &lang, "question", &question)])
        }
        None => {
            info!(user_id = msg.user_id, index = index, "Question number out of range");
            Ok(vec![ctx.i18n.t("admin.invalid_number", &lang, None)])
        }
    }
}

/// Handle /show_questions command
pub async fn handle_show_questions(ctx: &AppContext, msg: &IncomingMessage) -> Result<Replies> {
    if let Some(denied) = deny_unless_admin(ctx, msg, "show_questions") {
        return Ok(denied);
    }

    let lang = ctx.language_for(msg);
    let questions = ctx.questions.read().await;
    if questions.is_empty() {
        return Ok(vec![ctx.i18n.t("admin.list_empty", &lang, None)]);
    }

    let listing = format_numbered_list(questions.questions());
    Ok(vec![ctx.i18n.t_with("admin.current_questions", &lang, "questions", &listing)])
}
