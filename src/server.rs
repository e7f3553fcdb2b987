//! HTTP surface: route wiring, boundary JSON shapes, and error-to-status
//! mapping. All decision logic lives in the pipeline; handlers only
//! translate between HTTP and pipeline types.

use crate::i18n::LanguageRegistry;
use crate::pipeline::{Pipeline, TranslateError, TranslateRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared application state.
pub struct AppState {
    pub pipeline: Pipeline,
}

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    // The original UI is served from the browser, so CORS stays permissive
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/translate", post(translate))
        .route("/health", get(health))
        .fallback_service(ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Successful translation (or detection) response body.
#[derive(Debug, Serialize)]
struct TranslationBody {
    success: bool,
    translation: String,
    detected_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f64>,
}

/// Failure response body: categorized message only, no internal detail.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            success: false,
            error: message.into(),
        }),
    )
        .into_response()
}

/// POST /translate
async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!("Rejected unparseable translation request: {}", rejection);
            return failure(StatusCode::BAD_REQUEST, "Invalid JSON body");
        }
    };

    match state.pipeline.run(&request).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(TranslationBody {
                success: true,
                translation: outcome.translation,
                detected_language: outcome.detected_language,
                confidence: outcome.confidence,
            }),
        )
            .into_response(),
        Err(error) => {
            warn!("Translation request failed: {}", error);
            let status = match &error {
                TranslateError::Validation(_) | TranslateError::UnsupportedLanguage(_) => {
                    StatusCode::BAD_REQUEST
                }
                TranslateError::Provider(_) => StatusCode::BAD_GATEWAY,
            };
            failure(status, error.to_string())
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
    translation_service: &'static str,
    supported_languages: Vec<&'static str>,
}

/// GET /health — read-only process status and the supported language set.
async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        service: "Quantum Translator",
        translation_service: "Google Translate",
        supported_languages: LanguageRegistry::get().codes_with_auto(),
    })
}
