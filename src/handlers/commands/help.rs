//! Help command handler

use crate::handlers::context::AppContext;
use crate::handlers::Replies;
use crate::models::IncomingMessage;

/// Handle /help command
pub fn handle_help(ctx: &AppContext, msg: &IncomingMessage) -> Replies {
    let lang = ctx.language_for(msg);
    let mut help_text = ctx.i18n.t("messages.help", &lang, None);

    if ctx.is_admin(msg.user_id) {
        help_text.push_str("\n\n");
        help_text.push_str(&ctx.i18n.t("admin.panel", &lang, None));
    }

    vec![help_text]
}
