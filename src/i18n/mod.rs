//! Internationalization (i18n) module: the supported language set and the
//! code-normalization layer in front of it.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages, their
//!   display names, and the alias table
//! - `language`: Type-safe `Language` and `SourceLang` types that replace
//!   raw string codes
//! - `normalize`: Maps arbitrary user input onto the supported set (or
//!   "auto"), never failing
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{normalize, Language, SourceLang};
//!
//! let portuguese = Language::from_code("pt")?;
//! assert_eq!(normalize("pt-BR"), SourceLang::Known(portuguese));
//! ```

mod language;
mod normalize;
mod registry;

pub use language::{Language, SourceLang};
pub use normalize::normalize;
pub use registry::{LanguageConfig, LanguageRegistry};
