//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{SurveyBotError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_questions_config(&settings.questions)?;
    validate_google_config(&settings.google)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(SurveyBotError::Config(
            "Bot token is required".to_string()
        ));
    }

    if config.admin_id <= 0 {
        return Err(SurveyBotError::Config(
            "Admin ID must be a positive Telegram user ID".to_string()
        ));
    }

    Ok(())
}

/// Validate question file configuration
fn validate_questions_config(config: &super::QuestionsConfig) -> Result<()> {
    if config.file_path.is_empty() {
        return Err(SurveyBotError::Config(
            "Questions file path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate Google Sheets configuration
fn validate_google_config(config: &super::GoogleConfig) -> Result<()> {
    if config.spreadsheet_id.is_empty() {
        return Err(SurveyBotError::Config(
            "Google spreadsheet ID is required".to_string()
        ));
    }

    if config.credentials_path.is_empty() {
        return Err(SurveyBotError::Config(
            "Google service account credentials path is required".to_string()
        ));
    }

    if config.range.is_empty() {
        return Err(SurveyBotError::Config(
            "Google Sheets target range is required".to_string()
        ));
    }

    if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://") {
        return Err(SurveyBotError::Config(
            format!("Invalid Google Sheets API base URL: {}", config.api_base_url)
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(SurveyBotError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(SurveyBotError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(SurveyBotError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SurveyBotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SurveyBotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
