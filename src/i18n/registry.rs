//! Language registry: single source of truth for all supported languages.
//!
//! The registry holds the fixed set of languages the service can translate
//! between, plus the alias table used to map user-supplied identifiers
//! (locale variants, language names) onto canonical codes. It uses a
//! singleton pattern with `OnceLock` for thread-safe initialization.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "pt", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Portuguese")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Português")
    pub native_name: &'static str,
}

/// Global language registry singleton.
///
/// Fixed at process start and immutable thereafter. The special "auto"
/// sentinel is not a registry entry; it is handled by `SourceLang::Auto`.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its canonical code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All supported languages, in registry order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Canonical codes in registry order, preceded by the "auto" sentinel.
    ///
    /// This is the list the health endpoint reports.
    pub fn codes_with_auto(&self) -> Vec<&'static str> {
        std::iter::once("auto")
            .chain(self.languages.iter().map(|lang| lang.code))
            .collect()
    }

    /// Check whether a code is a canonical supported code.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Resolve a lowercase alias (locale variant or language name) to its
    /// canonical code. Canonical codes themselves are not aliases.
    pub fn resolve_alias(&self, alias: &str) -> Option<&'static str> {
        ALIASES
            .iter()
            .find(|(candidate, _)| *candidate == alias)
            .map(|(_, code)| *code)
    }
}

/// Alias table: lowercase user-facing identifier -> canonical code.
///
/// Covers locale-suffixed variants and English/native language names.
static ALIASES: &[(&str, &str)] = &[
    // Locale variants
    ("en-us", "en"),
    ("en-gb", "en"),
    ("pt-br", "pt"),
    ("pt-pt", "pt"),
    ("es-es", "es"),
    ("es-mx", "es"),
    ("fr-fr", "fr"),
    ("fr-ca", "fr"),
    ("de-de", "de"),
    ("it-it", "it"),
    ("ja-jp", "ja"),
    ("ko-kr", "ko"),
    ("zh-cn", "zh"),
    ("zh-tw", "zh"),
    ("zh-hans", "zh"),
    ("zh-hant", "zh"),
    ("ru-ru", "ru"),
    ("ar-sa", "ar"),
    // English names
    ("english", "en"),
    ("portuguese", "pt"),
    ("spanish", "es"),
    ("french", "fr"),
    ("german", "de"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("korean", "ko"),
    ("chinese", "zh"),
    ("russian", "ru"),
    ("arabic", "ar"),
    // Native names
    ("inglês", "en"),
    ("português", "pt"),
    ("español", "es"),
    ("espanhol", "es"),
    ("français", "fr"),
    ("francês", "fr"),
    ("deutsch", "de"),
    ("alemão", "de"),
    ("italiano", "it"),
    ("japonês", "ja"),
    ("coreano", "ko"),
    ("chinês", "zh"),
    ("русский", "ru"),
    ("russo", "ru"),
    ("árabe", "ar"),
];

/// The fixed supported language set.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
        },
        LanguageConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
        },
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("en").expect("en should exist");

        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.native_name, "English");
    }

    #[test]
    fn test_get_by_code_portuguese() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("pt").expect("pt should exist");

        assert_eq!(config.code, "pt");
        assert_eq!(config.name, "Portuguese");
        assert_eq!(config.native_name, "Português");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("xx").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_auto_is_not_a_registry_entry() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("auto").is_none());
        assert!(!registry.is_supported("auto"));
    }

    #[test]
    fn test_list_contains_all_supported_languages() {
        let registry = LanguageRegistry::get();
        let all = registry.list();

        assert_eq!(all.len(), 11);
        for code in ["en", "pt", "es", "fr", "de", "it", "ja", "ko", "zh", "ru", "ar"] {
            assert!(
                all.iter().any(|lang| lang.code == code),
                "missing language: {}",
                code
            );
        }
    }

    #[test]
    fn test_codes_with_auto_starts_with_sentinel() {
        let codes = LanguageRegistry::get().codes_with_auto();

        assert_eq!(codes[0], "auto");
        assert_eq!(codes.len(), 12);
        assert!(codes.contains(&"pt"));
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("ar"));
        assert!(!registry.is_supported("xx"));
    }

    #[test]
    fn test_resolve_alias_locale_variants() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.resolve_alias("pt-br"), Some("pt"));
        assert_eq!(registry.resolve_alias("zh-cn"), Some("zh"));
        assert_eq!(registry.resolve_alias("zh-hant"), Some("zh"));
        assert_eq!(registry.resolve_alias("en-us"), Some("en"));
    }

    #[test]
    fn test_resolve_alias_language_names() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.resolve_alias("portuguese"), Some("pt"));
        assert_eq!(registry.resolve_alias("japonês"), Some("ja"));
        assert_eq!(registry.resolve_alias("deutsch"), Some("de"));
    }

    #[test]
    fn test_resolve_alias_unknown() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.resolve_alias("klingon"), None);
        // Canonical codes are not aliases
        assert_eq!(registry.resolve_alias("en"), None);
    }

    #[test]
    fn test_all_aliases_map_to_supported_codes() {
        let registry = LanguageRegistry::get();
        for (alias, code) in ALIASES {
            assert!(
                registry.is_supported(code),
                "alias '{}' maps to unsupported code '{}'",
                alias,
                code
            );
        }
    }
}
