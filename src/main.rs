use anyhow::{Context, Result};
use quantum_translator::config::Config;
use quantum_translator::detector::Detector;
use quantum_translator::pipeline::Pipeline;
use quantum_translator::provider::TranslationProvider;
use quantum_translator::server::{self, AppState};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quantum_translator=info".parse()?),
        )
        .init();

    info!("Starting Quantum Translator service");

    // Load configuration from environment
    let config = Config::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("Failed to create HTTP client")?;

    let state = Arc::new(AppState {
        pipeline: Pipeline::new(
            TranslationProvider::new(client, &config.translate_api_url),
            Detector::new(),
            config.max_text_length,
        ),
    });

    let app = server::router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
