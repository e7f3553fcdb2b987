//! Language type: flexible, validated language representation.
//!
//! `Language` wraps a canonical code that has been validated against the
//! registry, so a constructed value is always a supported language.
//! `SourceLang` adds the "auto" sentinel used for source languages only.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language drawn from the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "pt")
    code: &'static str,
}

impl Language {
    /// English: the detection fallback language.
    pub const ENGLISH: Language = Language { code: "en" };
    pub const PORTUGUESE: Language = Language { code: "pt" };
    pub const SPANISH: Language = Language { code: "es" };
    pub const FRENCH: Language = Language { code: "fr" };
    pub const GERMAN: Language = Language { code: "de" };
    pub const ITALIAN: Language = Language { code: "it" };

    /// Create a Language from a canonical code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the supported set
    /// * `Err` otherwise (including for the "auto" sentinel)
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a properly constructed Language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

/// A source-language selector: either a concrete supported language or the
/// "auto" sentinel asking the provider to detect the source itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLang {
    Auto,
    Known(Language),
}

impl SourceLang {
    /// The wire code sent to the translation backend.
    pub fn code(&self) -> &'static str {
        match self {
            SourceLang::Auto => "auto",
            SourceLang::Known(lang) => lang.code(),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLang::Auto)
    }
}
