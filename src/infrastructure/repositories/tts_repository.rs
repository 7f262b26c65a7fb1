use crate::domain::tts::{AudioSettings, ResolvedVoice};
use async_trait::async_trait;
use base64::Engine;

/// Audio as handed back by a provider.
/// JSON APIs ship it base64-encoded, binary APIs as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioContent {
    Base64(String),
    Binary(Vec<u8>),
}

impl AudioContent {
    /// Normalize to raw audio bytes
    pub fn into_bytes(self) -> Result<Vec<u8>, String> {
        match self {
            AudioContent::Binary(bytes) => Ok(bytes),
            AudioContent::Base64(encoded) => base64::engine::general_purpose::STANDARD
                .decode(encoded.as_bytes())
                .map_err(|e| format!("Failed to decode base64 audio: {}", e)),
        }
    }
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (Google Cloud today).
///
/// Implementations synthesize exactly one SSML chunk per call; splitting and
/// merging happen in the domain service.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize one SSML chunk as MP3 with the given voice
    ///
    /// Returns `Ok(None)` when the provider answered without any audio.
    ///
    /// # Errors
    /// Returns the provider's message if the call fails or the provider is unavailable
    async fn synthesize(
        &self,
        ssml: &str,
        voice: &ResolvedVoice,
        audio: &AudioSettings,
    ) -> Result<Option<AudioContent>, String>;

    /// Whether the provider has the credentials it needs to serve requests
    fn is_configured(&self) -> bool {
        true
    }
}
