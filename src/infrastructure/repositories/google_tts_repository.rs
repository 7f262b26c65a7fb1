use super::tts_repository::{AudioContent, TtsRepository};
use crate::domain::tts::{AudioSettings, ResolvedVoice};
use crate::infrastructure::google::TokenProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const SYNTHESIZE_PATH: &str = "/v1/text:synthesize";

/// Every observed deployment asks for MP3
const AUDIO_ENCODING: &str = "MP3";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    ssml: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig<'a> {
    audio_encoding: &'static str,
    #[serde(flatten)]
    settings: &'a AudioSettings,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent", default)]
    audio_content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    message: String,
}

/// Google Cloud Text-to-Speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    token_provider: Option<Arc<dyn TokenProvider>>,
    endpoint: String,
}

impl GoogleTtsRepository {
    /// `token_provider` is `None` when no service account was configured;
    /// every synthesis call then fails with a configuration error.
    pub fn new(
        http_client: reqwest::Client,
        token_provider: Option<Arc<dyn TokenProvider>>,
        endpoint: String,
    ) -> Self {
        Self {
            http_client,
            token_provider,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn synthesize_url(&self) -> String {
        format!("{}{}", self.endpoint, SYNTHESIZE_PATH)
    }

    async fn access_token(&self) -> Result<String, String> {
        let token_provider = self.token_provider.as_ref().ok_or_else(|| {
            "Google Cloud credentials are not configured (set GCP_SERVICE_ACCOUNT_JSON)".to_string()
        })?;

        token_provider.get_token().await.map_err(|e| {
            tracing::error!(error = %format!("{:#}", e), "Google Cloud authentication failed");
            format!("Google Cloud authentication failed: {:#}", e)
        })
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(
        &self,
        ssml: &str,
        voice: &ResolvedVoice,
        audio: &AudioSettings,
    ) -> Result<Option<AudioContent>, String> {
        let token = self.access_token().await?;

        let body = SynthesizeRequest {
            input: SynthesisInput { ssml },
            voice: VoiceSelection {
                language_code: &voice.language_code,
                name: voice.name,
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING,
                settings: audio,
            },
        };

        tracing::info!(
            voice = voice.name,
            language = %voice.language_code,
            audio_encoding = AUDIO_ENCODING,
            ssml_bytes = ssml.len(),
            "Calling Google Cloud synthesize"
        );

        let response = self
            .http_client
            .post(self.synthesize_url())
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    voice = voice.name,
                    ssml_bytes = ssml.len(),
                    "Google Cloud synthesize request failed"
                );
                format!("Google TTS request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleErrorBody>(&raw)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| status.to_string());

            tracing::error!(
                status = %status,
                message = %message,
                voice = voice.name,
                "Google Cloud synthesize returned an error"
            );
            return Err(format!("Google TTS error ({}): {}", status.as_u16(), message));
        }

        let parsed: SynthesizeResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Google Cloud synthesize response");
            format!("Malformed Google TTS response: {}", e)
        })?;

        Ok(parsed
            .audio_content
            .filter(|content| !content.is_empty())
            .map(AudioContent::Base64))
    }

    fn is_configured(&self) -> bool {
        self.token_provider.is_some()
    }
}
