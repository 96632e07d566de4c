//! Message handlers module
//!
//! Bridges Telegram updates to the command router and sends the replies back.

use std::sync::Arc;
use teloxide::{prelude::*, types::Message, Bot};
use tracing::{debug, error};
use crate::handlers::context::AppContext;
use crate::handlers::router;
use crate::models::IncomingMessage;
use crate::utils::errors::Result;
use crate::utils::helpers::{chunk_message, TELEGRAM_MESSAGE_LIMIT};

/// Handle an incoming Telegram message
///
/// Messages without text or without a sender are ignored.
pub async fn handle_message(bot: Bot, msg: Message, ctx: Arc<AppContext>) -> Result<()> {
    let Some(incoming) = IncomingMessage::from_telegram(&msg) else {
        debug!(chat_id = msg.chat.id.0, message_id = msg.id.0, "Ignoring message without text or sender");
        return Ok(());
    };

    let replies = match router::dispatch(&ctx, &incoming).await {
        Ok(replies) => replies,
        Err(e) => {
            error!(
                user_id = incoming.user_id,
                chat_id = incoming.chat_id,
                severity = %e.severity(),
                error = %e,
                "Failed to handle message"
            );
            return Err(e);
        }
    };

    for reply in replies {
        for chunk in chunk_message(&reply, TELEGRAM_MESSAGE_LIMIT) {
            bot.send_message(msg.chat.id, chunk).await?;
        }
    }

    Ok(())
}
