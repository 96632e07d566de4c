//! Survey handlers
//!
//! Handles the /start command and the answers that follow it.

use tracing::{debug, info};
use crate::handlers::context::AppContext;
use crate::handlers::Replies;
use crate::models::{IncomingMessage, ResponseRow};
use crate::state::ConversationState;
use crate::utils::errors::Result;
use crate::utils::logging::log_survey_completed;

/// Handle /start command - begin the survey with the first question
///
/// Restarts from the first question if the user was already mid-survey.
pub async fn handle_start(ctx: &AppContext, msg: &IncomingMessage) -> Result<Replies> {
    let lang = ctx.language_for(msg);

    let first_question = {
        let questions = ctx.questions.read().await;
        match questions.get(0) {
            Some(question) => question.to_string(),
            None => {
                debug!(user_id = msg.user_id, "Survey requested but no questions configured");
                return Ok(vec![ctx.i18n.t("survey.empty", &lang, None)]);
            }
        }
    };

    let key = ctx.conversation_key(msg);
    ctx.states.set(key, ConversationState::new_survey()).await;
    info!(user_id = msg.user_id, chat_id = msg.chat_id, "Survey started");

    Ok(vec![first_question])
}

/// Record an answer and either ask the next question or finish the survey
///
/// When the response sink fails the stored state is left as it was before
/// this answer, so sending the answer again retries the append.
pub async fn process_answer(
    ctx: &AppContext,
    msg: &IncomingMessage,
    current_question: usize,
    mut answers: Vec<String>,
) -> Result<Replies> {
    let key = ctx.conversation_key(msg);
    answers.push(msg.text.clone());
    let next_question = current_question + 1;

    let next = ctx.questions.read().await.get(next_question).map(str::to_string);
    if let Some(question) = next {
        debug!(user_id = msg.user_id, question = next_question, "Asking next question");
        ctx.states
            .set(
                key,
                ConversationState::InSurvey {
                    current_question: next_question,
                    answers,
                },
            )
            .await;
        return Ok(vec![question]);
    }

    let answer_count = answers.len();
    let row = ResponseRow::new(msg.user_id, answers);
    ctx.sink.append_row(&row).await?;
    ctx.states.clear(&key).await;

    log_survey_completed(msg.user_id, msg.chat_id, answer_count);
    let lang = ctx.language_for(msg);
    Ok(vec![ctx.i18n.t("survey.completed", &lang, None)])
}
