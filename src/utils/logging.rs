//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the SurveyBot application.

use std::path::Path;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{SurveyBotError, Result};

/// Initialize logging based on configuration
///
/// When a log directory is configured, records are also written to a daily
/// rolling file. The returned guard flushes that writer and must be held
/// until shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| SurveyBotError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    let guard = match config.file_path.as_deref() {
        Some(dir) if !dir.is_empty() => {
            let file_appender = tracing_appender::rolling::daily(Path::new(dir), "survey-bot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
                .init();
            Some(guard)
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .init();
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str, details: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        details = details,
        "Admin action performed"
    );
}

/// Log a completed survey
pub fn log_survey_completed(user_id: i64, chat_id: i64, answer_count: usize) {
    info!(
        user_id = user_id,
        chat_id = chat_id,
        answer_count = answer_count,
        "Survey completed"
    );
}
