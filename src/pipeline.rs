//! Translation request orchestration.
//!
//! One `Pipeline::run` call drives a request through validation, language
//! normalization, optional detection, and translation dispatch, and
//! reconciles the steps into a single deterministic outcome. All failures
//! come back as typed `TranslateError` values; nothing escapes untyped.

use crate::detector::Detector;
use crate::i18n::{normalize, SourceLang};
use crate::provider::{ProviderError, TranslationProvider};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// One incoming translation (or detection) request.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    /// The text to translate or classify.
    pub text: String,

    /// Source language identifier; "auto" asks for detection.
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    /// Target language identifier; required unless `detect_only`.
    #[serde(default)]
    pub target_lang: Option<String>,

    /// When true, only language detection is performed.
    #[serde(default)]
    pub detect_only: bool,
}

fn default_source_lang() -> String {
    "auto".to_string()
}

/// The assembled result of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    /// Translated text; empty for detect-only requests.
    pub translation: String,

    /// The source language: the provider's reported language when it gave
    /// one, otherwise the detector's best guess.
    pub detected_language: String,

    /// Detection confidence, when either the provider or the detector
    /// supplied one.
    pub confidence: Option<f64>,
}

/// Externally visible failure kinds.
///
/// Detection unavailability is deliberately absent: the detector absorbs it
/// into its documented fallback and never fails a request.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Malformed or missing required input; client-attributable.
    #[error("{0}")]
    Validation(String),

    /// The requested target language is outside the supported set.
    #[error("Unsupported target language: '{0}'")]
    UnsupportedLanguage(String),

    /// The external translation backend failed; possibly transient.
    #[error("Translation failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Request-level pipeline shared by all requests.
///
/// Holds the only cross-request state in the process: the provider's HTTP
/// client and the detector's lazily-initialized model handle.
pub struct Pipeline {
    provider: TranslationProvider,
    detector: Detector,
    max_text_length: usize,
}

impl Pipeline {
    pub fn new(provider: TranslationProvider, detector: Detector, max_text_length: usize) -> Self {
        Self {
            provider,
            detector,
            max_text_length,
        }
    }

    /// Run one request to completion.
    ///
    /// State machine: Received -> Validated -> (DetectOnly | Translating)
    /// -> outcome or typed error.
    pub async fn run(&self, request: &TranslateRequest) -> Result<TranslationOutcome, TranslateError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(TranslateError::Validation("Text is required".to_string()));
        }
        if text.chars().count() > self.max_text_length {
            return Err(TranslateError::Validation(format!(
                "Text exceeds the maximum length of {} characters",
                self.max_text_length
            )));
        }

        if request.detect_only {
            // Detection only; translation is never attempted on this branch
            let detected = self.detector.detect(text).await;
            return Ok(TranslationOutcome {
                translation: String::new(),
                detected_language: detected.language.code().to_string(),
                confidence: Some(detected.confidence),
            });
        }

        let target_raw = request.target_lang.as_deref().map(str::trim).unwrap_or("");
        if target_raw.is_empty() {
            return Err(TranslateError::Validation(
                "Target language is required".to_string(),
            ));
        }

        let source = normalize(&request.source_lang);
        // Targets are never defaulted to "auto"; anything that does not
        // resolve to a concrete supported language is rejected
        let target = match normalize(target_raw) {
            SourceLang::Known(language) => language,
            SourceLang::Auto => {
                return Err(TranslateError::UnsupportedLanguage(target_raw.to_string()))
            }
        };

        let reply = self.provider.translate(text, source, target).await?;

        let (detected_language, confidence) = if source.is_auto() {
            // Independent detection alongside the provider's own report.
            // The provider's reported source stays authoritative; the
            // detector fills in what the provider left out.
            let independent = self.detector.detect(text).await;
            let language = if reply.reported_source.is_empty() {
                independent.language.code().to_string()
            } else {
                reply.reported_source.clone()
            };
            (language, reply.confidence.or(Some(independent.confidence)))
        } else {
            let language = if reply.reported_source.is_empty() {
                source.code().to_string()
            } else {
                reply.reported_source.clone()
            };
            (language, reply.confidence)
        };

        debug!(
            detected = %detected_language,
            target = target.code(),
            "Translation completed"
        );

        Ok(TranslationOutcome {
            translation: reply.translation,
            detected_language,
            confidence,
        })
    }
}
