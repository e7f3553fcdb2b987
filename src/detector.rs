//! Language detection with graceful degradation.
//!
//! Wraps a lazily-initialized classification model behind a process-wide
//! handle. Detection never fails the caller: if the model cannot be built or
//! the text is too short to classify, the documented low-confidence English
//! fallback is returned instead.

use crate::i18n::Language;
use anyhow::Result;
use tokio::sync::OnceCell;
use tracing::{info, warn};
use whatlang::Lang;

/// Minimum text length (after whitespace normalization) worth classifying.
const MIN_CLASSIFIABLE_CHARS: usize = 3;

/// Confidence reported with the English fallback.
const FALLBACK_CONFIDENCE: f64 = 0.5;

/// A best-guess language with the model's top-1 confidence score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionResult {
    pub language: Language,
    pub confidence: f64,
}

impl DetectionResult {
    /// The documented fallback when detection is unavailable or the input
    /// is too short to classify reliably.
    pub fn fallback() -> Self {
        Self {
            language: Language::ENGLISH,
            confidence: FALLBACK_CONFIDENCE,
        }
    }
}

/// A loaded classification model: raw predicted label plus top-1 score.
///
/// The label is an ISO 639-1 code where the model can produce one; labels
/// outside the detector's fixed mapping collapse to English downstream.
pub trait DetectionModel: Send + Sync {
    fn classify(&self, text: &str) -> Option<(String, f64)>;
}

/// Builds the model on first use.
pub type ModelLoader = dyn Fn() -> Result<Box<dyn DetectionModel>> + Send + Sync;

/// Language detector with a lazily-initialized shared model handle.
///
/// The handle is initialized at most once per process via a single-flight
/// guard: concurrent first callers wait on one initialization attempt. A
/// failed attempt is not cached, so a later request may retry the load.
pub struct Detector {
    handle: OnceCell<Box<dyn DetectionModel>>,
    loader: Box<ModelLoader>,
}

impl Detector {
    /// Detector backed by the embedded statistical model.
    pub fn new() -> Self {
        Self::with_loader(Box::new(|| {
            info!("Loading language identification model");
            Ok(Box::new(WhatlangModel::new()) as Box<dyn DetectionModel>)
        }))
    }

    /// Detector with a custom model loader (test seam).
    pub fn with_loader(loader: Box<ModelLoader>) -> Self {
        Self {
            handle: OnceCell::new(),
            loader,
        }
    }

    /// Detect the language of `text`.
    ///
    /// Never fails: model unavailability and too-short input both yield the
    /// `("en", 0.5)` fallback. Confidence is the model's own top-1 score,
    /// clamped to [0, 1].
    pub async fn detect(&self, text: &str) -> DetectionResult {
        let cleaned = text.trim().replace('\n', " ");
        if cleaned.chars().count() < MIN_CLASSIFIABLE_CHARS {
            return DetectionResult::fallback();
        }

        let model = match self
            .handle
            .get_or_try_init(|| async { (self.loader)() })
            .await
        {
            Ok(model) => model,
            Err(error) => {
                warn!("Language model unavailable, using fallback: {:#}", error);
                return DetectionResult::fallback();
            }
        };

        match model.classify(&cleaned) {
            Some((label, confidence)) => DetectionResult {
                language: label_to_language(&label),
                confidence: confidence.clamp(0.0, 1.0),
            },
            None => DetectionResult::fallback(),
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed label -> supported language mapping.
///
/// Labels outside the table collapse to English. This bias restricts
/// detection output to the codes the translation pipeline works with.
fn label_to_language(label: &str) -> Language {
    match label {
        "en" => Language::ENGLISH,
        "pt" => Language::PORTUGUESE,
        "es" => Language::SPANISH,
        "fr" => Language::FRENCH,
        "de" => Language::GERMAN,
        "it" => Language::ITALIAN,
        _ => Language::ENGLISH,
    }
}

/// Classification backend built on whatlang's embedded trigram model.
struct WhatlangModel {
    inner: whatlang::Detector,
}

impl WhatlangModel {
    fn new() -> Self {
        Self {
            inner: whatlang::Detector::new(),
        }
    }
}

impl DetectionModel for WhatlangModel {
    fn classify(&self, text: &str) -> Option<(String, f64)> {
        let info = self.inner.detect(text)?;
        let label = match info.lang() {
            Lang::Eng => "en",
            Lang::Por => "pt",
            Lang::Spa => "es",
            Lang::Fra => "fr",
            Lang::Deu => "de",
            Lang::Ita => "it",
            // Fall back to whatlang's 3-letter code; the label table
            // collapses these to English
            other => other.code(),
        };
        Some((label.to_string(), info.confidence()))
    }
}
