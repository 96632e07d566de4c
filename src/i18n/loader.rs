//! Translation loader and i18n management
//!
//! This module provides translation loading, language detection and message
//! formatting for the bot's replies.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, info, warn};
use crate::config::I18nConfig;
use crate::utils::errors::{SurveyBotError, Result};

/// Catalogs compiled into the binary, used when no translations directory exists
const BUNDLED_TRANSLATIONS: &[(&str, &str)] = &[
    ("en", include_str!("../../translations/en.json")),
    ("ru", include_str!("../../translations/ru.json")),
];

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create a new I18n instance with no catalogs loaded
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
        }
    }

    /// Create an instance populated from the bundled catalogs
    pub fn bundled(config: &I18nConfig) -> Result<Self> {
        let mut i18n = Self::new(config);
        i18n.load_bundled()?;
        Ok(i18n)
    }

    /// Load translation files from the configured directory
    ///
    /// Falls back to the bundled catalogs when the directory does not exist.
    pub async fn load_translations(&mut self, translations_dir: &Path) -> Result<()> {
        if !translations_dir.exists() {
            warn!(dir = %translations_dir.display(), "Translations directory not found, using bundled catalogs");
            return self.load_bundled();
        }

        for lang_code in self.supported_languages.clone() {
            let file_path = translations_dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                let content = fs::read_to_string(&file_path).await?;
                self.insert_catalog(&lang_code, &content)?;
                info!("Loaded translations for language: {}", lang_code);
            } else {
                warn!("Translation file not found: {}", file_path.display());
                if lang_code == self.default_language {
                    return Err(SurveyBotError::Config(
                        format!("Default language translation file not found: {}", file_path.display())
                    ));
                }
            }
        }

        Ok(())
    }

    fn load_bundled(&mut self) -> Result<()> {
        for (lang_code, content) in BUNDLED_TRANSLATIONS {
            if self.is_language_supported(lang_code) {
                self.insert_catalog(lang_code, content)?;
            }
        }

        if !self.translations.contains_key(&self.default_language) {
            return Err(SurveyBotError::Config(
                format!("No bundled translations for default language: {}", self.default_language)
            ));
        }

        Ok(())
    }

    fn insert_catalog(&mut self, lang_code: &str, content: &str) -> Result<()> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(map) => {
                debug!("Loaded {} top-level translation keys for {}", map.len(), lang_code);
                self.translations.insert(lang_code.to_string(), map);
                Ok(())
            }
            _ => Err(SurveyBotError::Config(
                format!("Invalid translation file format for {}", lang_code)
            )),
        }
    }

    /// Get a translated message
    ///
    /// Looks the key up in `lang`, then in the default language; an unknown
    /// key is returned verbatim.
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);

        let text = self
            .get_translation(key, &effective_lang)
            .or_else(|| self.get_translation(key, &self.default_language));

        match text {
            Some(text) => self.format_message(text, params),
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    /// Translate with a single `{name}` parameter
    pub fn t_with(&self, key: &str, lang: &str, name: &str, value: &str) -> String {
        let mut params = TranslationParams::new();
        params.insert(name.to_string(), value.to_string());
        self.t(key, lang, Some(&params))
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    fn get_effective_language(&self, lang: &str) -> String {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang.to_string()
        } else {
            self.default_language.clone()
        }
    }

    /// Resolve a dotted key like "admin.question_added"
    fn get_translation(&self, key: &str, lang: &str) -> Option<&str> {
        let mut parts = key.split('.');
        let mut current = self.translations.get(lang)?.get(parts.next()?)?;

        for part in parts {
            current = current.get(part)?;
        }

        current.as_str()
    }

    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        let mut result = template.to_string();
        if let Some(params) = params {
            for (key, value) in params {
                result = result.replace(&format!("{{{}}}", key), value);
            }
        }
        result
    }

    /// Detect user language from Telegram language code
    pub fn detect_user_language(&self, telegram_lang: Option<&str>) -> String {
        if let Some(lang) = telegram_lang {
            // "en-US" -> "en"
            let lang_code = lang.split('-').next().unwrap_or(lang);

            if self.is_language_supported(lang_code) {
                return lang_code.to_string();
            }
        }

        self.default_language.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> I18nConfig {
        I18nConfig {
            default_language: "ru".to_string(),
            supported_languages: vec!["ru".to_string(), "en".to_string()],
            translations_dir: "translations".to_string(),
        }
    }

    #[test]
    fn test_language_detection() {
        let i18n = I18n::new(&create_test_config());

        assert_eq!(i18n.detect_user_language(Some("en-US")), "en");
        assert_eq!(i18n.detect_user_language(Some("ru")), "ru");
        assert_eq!(i18n.detect_user_language(Some("fr")), "ru");
        assert_eq!(i18n.detect_user_language(None), "ru");
    }

    #[test]
    fn test_bundled_catalogs() {
        let i18n = I18n::bundled(&create_test_config()).unwrap();

        assert_eq!(i18n.t("survey.completed", "ru", None), "Спасибо за прохождение опроса!");
        assert_eq!(i18n.t("survey.completed", "en", None), "Thank you for completing the survey!");
        // unsupported language falls back to the default
        assert_eq!(i18n.t("admin.access_denied", "de", None), "У вас нет доступа к этой команде.");
    }

    #[test]
    fn test_message_formatting() {
        let i18n = I18n::bundled(&create_test_config()).unwrap();

        let text = i18n.t_with("admin.question_added", "en", "question", "Where are you from?");
        assert_eq!(text, "Question added: Where are you from?");
    }

    #[test]
    fn test_unknown_key_returned_verbatim() {
        let i18n = I18n::bundled(&create_test_config()).unwrap();
        assert_eq!(i18n.t("admin.no_such_key", "en", None), "admin.no_such_key");
    }

    #[tokio::test]
    async fn test_missing_directory_uses_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let mut i18n = I18n::new(&create_test_config());
        i18n.load_translations(&dir.path().join("absent")).await.unwrap();
        assert_eq!(i18n.t("survey.empty", "en", None), "The questionnaire is empty for now. Come back later.");
    }

    #[tokio::test]
    async fn test_directory_catalog_overrides_bundled() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ru.json"), r#"{"survey": {"completed": "Готово"}}"#).unwrap();

        let mut i18n = I18n::new(&create_test_config());
        i18n.load_translations(dir.path()).await.unwrap();
        assert_eq!(i18n.t("survey.completed", "ru", None), "Готово");
        // en.json is absent; non-default languages are optional
        assert_eq!(i18n.t("survey.completed", "en", None), "Готово");
    }
}
