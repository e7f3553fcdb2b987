//! Language code normalization.
//!
//! Maps arbitrary user-supplied language identifiers (aliases, case and
//! locale variants, language names) onto the canonical supported set. The
//! normalizer never fails: anything it cannot place degrades to "auto".

use crate::i18n::{Language, LanguageRegistry, SourceLang};
use tracing::warn;

/// Normalize a user-supplied language identifier.
///
/// * Empty input and the literal "auto" yield `SourceLang::Auto`.
/// * Known aliases and canonical codes yield the canonical language.
/// * Anything else yields `SourceLang::Auto` with a warning diagnostic.
///
/// Pure lookup, no I/O; callers can rely on the result always being "auto"
/// or a supported language.
pub fn normalize(raw: &str) -> SourceLang {
    let cleaned = raw.trim().to_lowercase();
    if cleaned.is_empty() || cleaned == "auto" {
        return SourceLang::Auto;
    }

    let registry = LanguageRegistry::get();

    if let Some(code) = registry.resolve_alias(&cleaned) {
        // Aliases only map to registry codes, so construction cannot fail
        if let Ok(language) = Language::from_code(code) {
            return SourceLang::Known(language);
        }
    }

    if let Ok(language) = Language::from_code(&cleaned) {
        return SourceLang::Known(language);
    }

    warn!(
        input = raw,
        "Unrecognized language identifier, falling back to auto"
    );
    SourceLang::Auto
}
