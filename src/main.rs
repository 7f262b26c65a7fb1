use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ssml_tts_backend::controllers::tts::TtsController;
use ssml_tts_backend::domain::tts::TtsService;
use ssml_tts_backend::infrastructure::config::{Config, LogFormat};
use ssml_tts_backend::infrastructure::google::{ServiceAccountTokenProvider, TokenProvider};
use ssml_tts_backend::infrastructure::http::{build_router, start_http_server};
use ssml_tts_backend::infrastructure::repositories::GoogleTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        development = config.is_development(),
        "Starting SSML TTS Backend on {}:{}",
        config.host,
        config.port
    );

    // One pooled HTTP client for all synthesis calls
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.tts_request_timeout_secs))
        .build()?;

    // Credentials: malformed JSON or an unusable key stops startup here
    let token_provider: Option<Arc<dyn TokenProvider>> = match &config.gcp_service_account_json {
        Some(json) => {
            let provider = ServiceAccountTokenProvider::from_json(json)?;
            provider
                .get_token()
                .await
                .context("GCP service account credentials cannot produce an access token")?;
            tracing::info!(
                client_email = provider.client_email(),
                "Google Cloud service account loaded"
            );
            let provider: Arc<dyn TokenProvider> = Arc::new(provider);
            Some(provider)
        }
        None => {
            tracing::warn!(
                "GCP_SERVICE_ACCOUNT_JSON not set. Synthesis requests will fail until credentials are configured"
            );
            None
        }
    };

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!(endpoint = %config.google_tts_endpoint, "Instantiating repositories...");
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http_client,
        token_provider,
        config.google_tts_endpoint.clone(),
    ));

    // 2. Instantiate services
    tracing::info!(
        max_chunk_bytes = config.tts_max_chunk_bytes,
        chunk_concurrency = config.tts_chunk_concurrency,
        strict_audio = config.tts_strict_audio,
        "Instantiating services..."
    );
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        config.tts_max_chunk_bytes,
        config.tts_chunk_concurrency,
        config.tts_strict_audio,
    ));

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let tts_controller = Arc::new(TtsController::new(tts_service.clone()));

    // Start HTTP server with all routes
    let app = build_router(tts_controller, tts_service);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ssml_tts_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
