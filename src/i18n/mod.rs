//! Internationalization module
//!
//! Reply texts are looked up in per-language JSON catalogs so the bot can
//! answer in the user's Telegram language.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
