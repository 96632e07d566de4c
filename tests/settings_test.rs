//! Configuration loading tests
//!
//! These tests modify process environment variables and therefore run
//! serially.

use serial_test::serial;
use survey_bot::config::Settings;

const VARS: &[&str] = &[
    "API_TOKEN",
    "ADMIN_ID",
    "GOOGLE_SHEET_ID",
    "SURVEYBOT__BOT__TOKEN",
    "SURVEYBOT__BOT__ADMIN_ID",
    "SURVEYBOT__GOOGLE__SPREADSHEET_ID",
    "SURVEYBOT__GOOGLE__RANGE",
    "SURVEYBOT__QUESTIONS__FILE_PATH",
    "SURVEYBOT__I18N__SUPPORTED_LANGUAGES",
    "SURVEYBOT__I18N__DEFAULT_LANGUAGE",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let settings = Settings::new().expect("settings load");
    assert_eq!(settings.questions.file_path, "questions.txt");
    assert_eq!(settings.google.range, "A1");
    assert_eq!(settings.google.credentials_path, "credentials.json");
    assert_eq!(settings.i18n.default_language, "ru");
    assert!(settings.logging.file_path.is_none());

    // token, admin and spreadsheet must be provided
    assert!(settings.validate().is_err());
}

#[test]
#[serial]
fn test_prefixed_environment_variables() {
    clear_env();
    std::env::set_var("SURVEYBOT__BOT__TOKEN", "12345:prefixed");
    std::env::set_var("SURVEYBOT__BOT__ADMIN_ID", "987654321");
    std::env::set_var("SURVEYBOT__GOOGLE__SPREADSHEET_ID", "sheet-from-prefix");
    std::env::set_var("SURVEYBOT__GOOGLE__RANGE", "Responses!A1");
    std::env::set_var("SURVEYBOT__I18N__SUPPORTED_LANGUAGES", "en,ru");
    std::env::set_var("SURVEYBOT__I18N__DEFAULT_LANGUAGE", "en");

    let settings = Settings::new().expect("settings load");
    clear_env();

    assert_eq!(settings.bot.token, "12345:prefixed");
    assert_eq!(settings.bot.admin_id, 987654321);
    assert_eq!(settings.google.spreadsheet_id, "sheet-from-prefix");
    assert_eq!(settings.google.range, "Responses!A1");
    assert_eq!(settings.i18n.supported_languages, vec!["en".to_string(), "ru".to_string()]);
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_flat_variables_override_prefixed() {
    clear_env();
    std::env::set_var("SURVEYBOT__BOT__TOKEN", "12345:prefixed");
    std::env::set_var("API_TOKEN", "12345:flat");
    std::env::set_var("ADMIN_ID", "42");
    std::env::set_var("GOOGLE_SHEET_ID", "flat-sheet");

    let settings = Settings::new().expect("settings load");
    clear_env();

    assert_eq!(settings.bot.token, "12345:flat");
    assert_eq!(settings.bot.admin_id, 42);
    assert_eq!(settings.google.spreadsheet_id, "flat-sheet");
    assert!(settings.validate().is_ok());
}
