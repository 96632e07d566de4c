//! SurveyBot Telegram Bot
//!
//! Main application entry point

use std::path::Path;
use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use survey_bot::{
    config::Settings,
    utils::logging,
    handlers::{handle_message, AppContext, Command},
    services::GoogleSheetsService,
    storage::QuestionStore,
    i18n::I18n,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on shutdown
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", survey_bot::info());

    // Load questions
    let questions = QuestionStore::open(&settings.questions.file_path).await?;

    // Initialize response sink
    info!("Connecting to Google Sheets...");
    let sheets = GoogleSheetsService::new(&settings.google).await?;

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations(Path::new(&settings.i18n.translations_dir)).await?;

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    let me = bot.get_me().await?;
    let bot_username = me.username().to_string();
    info!(bot_id = me.id.0, username = %bot_username, "Authorized with Telegram");

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register command menu");
    }

    let context = Arc::new(AppContext::new(
        me.id.0,
        bot_username,
        settings.bot.admin_id,
        questions,
        Arc::new(sheets),
        i18n,
    ));

    let states = context.states.clone();

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![context])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    let unfinished = states.active_conversations().await;
    if unfinished > 0 {
        warn!(conversations = unfinished, "Shutting down with unfinished conversations; their progress is lost");
    }

    info!("SurveyBot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    Update::filter_message().endpoint(handle_messages)
}

/// Handle regular messages
async fn handle_messages(bot: Bot, msg: Message, context: Arc<AppContext>) -> HandlerResult {
    handle_message(bot, msg, context).await?;
    Ok(())
}
