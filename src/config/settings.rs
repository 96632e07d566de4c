//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub questions: QuestionsConfig,
    pub google: GoogleConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    pub admin_id: i64,
}

/// Question file configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionsConfig {
    pub file_path: String,
}

/// Google Sheets configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleConfig {
    pub spreadsheet_id: String,
    pub range: String,
    pub credentials_path: String,
    pub api_base_url: String,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub translations_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from defaults, the configuration file and environment variables
    ///
    /// Precedence, lowest first: built-in defaults, `config.toml`,
    /// `SURVEYBOT__SECTION__KEY` variables, then the flat `API_TOKEN`,
    /// `ADMIN_ID` and `GOOGLE_SHEET_ID` variables.
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("bot.admin_id", defaults.bot.admin_id)?
            .set_default("questions.file_path", defaults.questions.file_path)?
            .set_default("google.spreadsheet_id", defaults.google.spreadsheet_id)?
            .set_default("google.range", defaults.google.range)?
            .set_default("google.credentials_path", defaults.google.credentials_path)?
            .set_default("google.api_base_url", defaults.google.api_base_url)?
            .set_default("i18n.default_language", defaults.i18n.default_language)?
            .set_default("i18n.supported_languages", defaults.i18n.supported_languages)?
            .set_default("i18n.translations_dir", defaults.i18n.translations_dir)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SURVEYBOT")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_languages")
                    .try_parsing(true),
            )
            .set_override_option("bot.token", std::env::var("API_TOKEN").ok())?
            .set_override_option("bot.admin_id", std::env::var("ADMIN_ID").ok())?
            .set_override_option("google.spreadsheet_id", std::env::var("GOOGLE_SHEET_ID").ok())?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SurveyBotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                admin_id: 0,
            },
            questions: QuestionsConfig {
                file_path: "questions.txt".to_string(),
            },
            google: GoogleConfig {
                spreadsheet_id: String::new(),
                range: "A1".to_string(),
                credentials_path: "credentials.json".to_string(),
                api_base_url: "https://sheets.googleapis.com".to_string(),
            },
            i18n: I18nConfig {
                default_language: "ru".to_string(),
                supported_languages: vec!["ru".to_string(), "en".to_string()],
                translations_dir: "translations".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
