use serde::Deserialize;
use std::env;

pub const DEFAULT_GOOGLE_TTS_ENDPOINT: &str = "https://texttospeech.googleapis.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Google Cloud Text-to-Speech
    pub gcp_service_account_json: Option<String>,
    pub google_tts_endpoint: String,
    pub tts_request_timeout_secs: u64,
    // Synthesis
    pub tts_max_chunk_bytes: usize,
    pub tts_chunk_concurrency: usize,
    pub tts_strict_audio: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            gcp_service_account_json: env::var("GCP_SERVICE_ACCOUNT_JSON")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            google_tts_endpoint: env::var("GOOGLE_TTS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_TTS_ENDPOINT.to_string()),
            tts_request_timeout_secs: env::var("TTS_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            tts_max_chunk_bytes: env::var("TTS_MAX_CHUNK_BYTES")
                .unwrap_or_else(|_| "4800".to_string())
                .parse()?,
            tts_chunk_concurrency: env::var("TTS_CHUNK_CONCURRENCY")
                .unwrap_or_else(|_| "4".to_string())
                .parse::<usize>()?
                .max(1),
            tts_strict_audio: env::var("TTS_STRICT_AUDIO")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
