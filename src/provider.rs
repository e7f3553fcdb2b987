//! Translation provider adapter.
//!
//! Wraps the external translation backend (Google Translate's gtx endpoint)
//! behind a typed interface. Failures surface as `ProviderError` values so
//! the pipeline can branch on declared error kinds instead of catching
//! broad failures.

use crate::i18n::{Language, SourceLang};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised by the external translation backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request could not be sent or timed out.
    #[error("Failed to reach translation backend: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Translation backend returned {status}")]
    Status { status: StatusCode },

    /// The backend answered 2xx but the payload was unusable.
    #[error("Invalid translation response: {0}")]
    Payload(String),

    /// The backend produced no translated text at all.
    #[error("Translation backend returned an empty translation")]
    EmptyTranslation,
}

/// What the backend reported for one translation call.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    /// The translated text.
    pub translation: String,

    /// The source language the backend says it translated from.
    pub reported_source: String,

    /// Backend confidence in the detected source, when supplied.
    pub confidence: Option<f64>,
}

/// Adapter over the Google Translate gtx endpoint.
///
/// The endpoint URL is injected so tests can point it at a mock server;
/// the request timeout lives on the shared `reqwest::Client`.
pub struct TranslationProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl TranslationProvider {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Translate `text` from `source` into `target`.
    ///
    /// When the source is a concrete language equal to the target, the input
    /// is returned unchanged without contacting the backend: identity
    /// translation is exact and costs no external call.
    pub async fn translate(
        &self,
        text: &str,
        source: SourceLang,
        target: Language,
    ) -> Result<ProviderReply, ProviderError> {
        if let SourceLang::Known(lang) = source {
            if lang == target {
                return Ok(ProviderReply {
                    translation: text.to_string(),
                    reported_source: lang.code().to_string(),
                    confidence: None,
                });
            }
        }

        debug!(
            source = source.code(),
            target = target.code(),
            "Dispatching translation to backend"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source.code()),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Translation backend error ({}): {}", status, body);
            return Err(ProviderError::Status { status });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Payload(e.to_string()))?;

        parse_reply(&payload)
    }
}

/// Parse the gtx response array.
///
/// Shape: translation segments at `[0][*][0]`, reported source language at
/// `[2]`, detection confidence (sometimes absent) at `[6]`.
fn parse_reply(payload: &Value) -> Result<ProviderReply, ProviderError> {
    let segments = payload
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| ProviderError::Payload("missing segment array".to_string()))?;

    // The backend splits long translations into segments; concatenate them
    let mut translation = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
            translation.push_str(text);
        }
    }

    if translation.is_empty() {
        return Err(ProviderError::EmptyTranslation);
    }

    let reported_source = payload
        .get(2)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let confidence = payload.get(6).and_then(|v| v.as_f64());

    Ok(ProviderReply {
        translation,
        reported_source,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gtx_body(translation: &str, source: &str) -> serde_json::Value {
        serde_json::json!([[[translation, "ignored original", null, null, 10]], null, source])
    }

    // ==================== Identity Short-Circuit ====================

    #[tokio::test]
    async fn test_identity_translation_skips_backend() {
        let mock_server = MockServer::start().await;

        // No request may reach the backend
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let provider = TranslationProvider::new(reqwest::Client::new(), mock_server.uri());
        let reply = provider
            .translate(
                "unchanged text",
                SourceLang::Known(Language::PORTUGUESE),
                Language::PORTUGUESE,
            )
            .await
            .expect("identity translation should succeed");

        assert_eq!(reply.translation, "unchanged text");
        assert_eq!(reply.reported_source, "pt");
        assert_eq!(reply.confidence, None);
    }

    #[tokio::test]
    async fn test_auto_source_same_as_target_still_calls_backend() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("sl", "auto"))
            .and(query_param("tl", "pt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gtx_body("Olá", "en")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = TranslationProvider::new(reqwest::Client::new(), mock_server.uri());
        let reply = provider
            .translate("Hello", SourceLang::Auto, Language::PORTUGUESE)
            .await
            .expect("should succeed");

        assert_eq!(reply.translation, "Olá");
    }

    // ==================== Success Paths ====================

    #[tokio::test]
    async fn test_translate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("client", "gtx"))
            .and(query_param("sl", "en"))
            .and(query_param("tl", "pt"))
            .and(query_param("q", "Hello"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gtx_body("Olá", "en")))
            .mount(&mock_server)
            .await;

        let provider = TranslationProvider::new(reqwest::Client::new(), mock_server.uri());
        let reply = provider
            .translate(
                "Hello",
                SourceLang::Known(Language::ENGLISH),
                Language::PORTUGUESE,
            )
            .await
            .expect("should succeed");

        assert_eq!(reply.translation, "Olá");
        assert_eq!(reply.reported_source, "en");
        assert_eq!(reply.confidence, None);
    }

    #[tokio::test]
    async fn test_translate_concatenates_segments() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!([
            [["Primeira parte. ", "First part. "], ["Segunda parte.", "Second part."]],
            null,
            "en"
        ]);

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let provider = TranslationProvider::new(reqwest::Client::new(), mock_server.uri());
        let reply = provider
            .translate(
                "First part. Second part.",
                SourceLang::Auto,
                Language::PORTUGUESE,
            )
            .await
            .expect("should succeed");

        assert_eq!(reply.translation, "Primeira parte. Segunda parte.");
    }

    #[tokio::test]
    async fn test_translate_passes_through_confidence_when_present() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!([[["Olá", "Hello"]], null, "en", null, null, null, 0.97]);

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let provider = TranslationProvider::new(reqwest::Client::new(), mock_server.uri());
        let reply = provider
            .translate("Hello", SourceLang::Auto, Language::PORTUGUESE)
            .await
            .expect("should succeed");

        assert_eq!(reply.confidence, Some(0.97));
    }

    // ==================== Failure Paths ====================

    #[tokio::test]
    async fn test_translate_backend_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&mock_server)
            .await;

        let provider = TranslationProvider::new(reqwest::Client::new(), mock_server.uri());
        let result = provider
            .translate("Hello", SourceLang::Auto, Language::PORTUGUESE)
            .await;

        match result {
            Err(ProviderError::Status { status }) => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE)
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_translate_malformed_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"not": "gtx"})),
            )
            .mount(&mock_server)
            .await;

        let provider = TranslationProvider::new(reqwest::Client::new(), mock_server.uri());
        let result = provider
            .translate("Hello", SourceLang::Auto, Language::PORTUGUESE)
            .await;

        assert!(matches!(result, Err(ProviderError::Payload(_))));
    }

    #[tokio::test]
    async fn test_translate_non_json_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
            .mount(&mock_server)
            .await;

        let provider = TranslationProvider::new(reqwest::Client::new(), mock_server.uri());
        let result = provider
            .translate("Hello", SourceLang::Auto, Language::PORTUGUESE)
            .await;

        assert!(matches!(result, Err(ProviderError::Payload(_))));
    }

    #[tokio::test]
    async fn test_translate_empty_translation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([[], null, "en"])),
            )
            .mount(&mock_server)
            .await;

        let provider = TranslationProvider::new(reqwest::Client::new(), mock_server.uri());
        let result = provider
            .translate("Hello", SourceLang::Auto, Language::PORTUGUESE)
            .await;

        assert!(matches!(result, Err(ProviderError::EmptyTranslation)));
    }

    #[tokio::test]
    async fn test_translate_timeout_is_a_request_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(gtx_body("Olá", "en"))
                    .set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(100))
            .build()
            .expect("client should build");

        let provider = TranslationProvider::new(client, mock_server.uri());
        let result = provider
            .translate("Hello", SourceLang::Auto, Language::PORTUGUESE)
            .await;

        assert!(matches!(result, Err(ProviderError::Request(_))));
    }
}
