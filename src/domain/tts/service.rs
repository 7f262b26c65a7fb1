use super::chunker::split_into_chunks;
use super::dto::{AudioSettings, TtsRequest};
use super::error::TtsServiceError;
use super::voice::{resolve_voice, ResolvedVoice};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub audio_data: Vec<u8>,
    pub voice: ResolvedVoice,
    pub chunk_count: usize,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    max_chunk_bytes: usize,
    chunk_concurrency: usize,
    strict_audio: bool,
}

impl TtsService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        max_chunk_bytes: usize,
        chunk_concurrency: usize,
        strict_audio: bool,
    ) -> Self {
        Self {
            tts_repo,
            max_chunk_bytes,
            chunk_concurrency: chunk_concurrency.max(1),
            strict_audio,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize an SSML document to a single MP3 byte stream
    ///
    /// This operation:
    /// - Resolves the legacy voice name to a provider voice
    /// - Splits the SSML into byte-bounded chunks
    /// - Calls the provider once per chunk
    /// - Concatenates the audio in chunk order
    async fn synthesize(&self, request: TtsRequest) -> Result<TtsSynthesisResult, TtsServiceError>;

    /// Whether synthesis can be attempted at all
    fn is_ready(&self) -> bool;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: TtsRequest) -> Result<TtsSynthesisResult, TtsServiceError> {
        if request.ssml.is_empty() {
            return Err(TtsServiceError::MissingSsml);
        }

        let start_time = std::time::Instant::now();
        let voice = resolve_voice(request.voice.as_deref());

        tracing::info!(
            requested_voice = request.voice.as_deref().unwrap_or("<none>"),
            voice = voice.name,
            language = %voice.language_code,
            ssml_bytes = request.ssml.len(),
            "TTS synthesis request"
        );

        if request.ssml.len() > self.max_chunk_bytes {
            tracing::warn!(
                ssml_bytes = request.ssml.len(),
                max_chunk_bytes = self.max_chunk_bytes,
                "SSML too long, splitting into chunks"
            );
        }

        let chunks = split_into_chunks(&request.ssml, self.max_chunk_bytes);
        tracing::info!(
            chunk_count = chunks.len(),
            ssml_bytes = request.ssml.len(),
            "SSML split into chunks"
        );

        let calls: Vec<_> = chunks
            .iter()
            .enumerate()
            .map(|(index, chunk)| self.synthesize_chunk(index, chunk, &voice, &request.audio))
            .collect();

        // `buffered` keeps results in chunk order whatever order calls finish in
        let parts: Vec<Option<Vec<u8>>> = stream::iter(calls)
            .buffered(self.chunk_concurrency)
            .try_collect()
            .await?;

        let audio_data = merge_audio(parts);
        if audio_data.is_empty() {
            tracing::warn!(chunk_count = chunks.len(), "Provider returned no audio for any chunk");
            return Err(TtsServiceError::EmptyAudio);
        }

        let duration = start_time.elapsed();
        let throughput_bytes_per_sec = if duration.as_secs_f64() > 0.0 {
            request.ssml.len() as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        tracing::info!(
            provider = "google",
            voice = voice.name,
            latency_ms = duration.as_millis(),
            ssml_bytes = request.ssml.len(),
            chunk_count = chunks.len(),
            audio_size_bytes = audio_data.len(),
            throughput_bytes_per_sec = format!("{:.2}", throughput_bytes_per_sec),
            "TTS synthesis completed"
        );

        Ok(TtsSynthesisResult {
            audio_data,
            voice,
            chunk_count: chunks.len(),
        })
    }

    fn is_ready(&self) -> bool {
        self.tts_repo.is_configured()
    }
}

impl TtsService {
    /// Synthesize a single chunk. `None` means the provider had no audio for it.
    async fn synthesize_chunk(
        &self,
        index: usize,
        chunk: &str,
        voice: &ResolvedVoice,
        audio: &AudioSettings,
    ) -> Result<Option<Vec<u8>>, TtsServiceError> {
        tracing::debug!(chunk_index = index, chunk_bytes = chunk.len(), "Synthesizing chunk");

        let content = self
            .tts_repo
            .synthesize(chunk, voice, audio)
            .await
            .map_err(TtsServiceError::Provider)?;

        let audio_bytes = match content {
            Some(content) => content.into_bytes().map_err(TtsServiceError::Provider)?,
            None => Vec::new(),
        };

        if audio_bytes.is_empty() {
            if self.strict_audio {
                tracing::error!(chunk_index = index, "Provider returned no audio content");
                return Err(TtsServiceError::EmptyAudio);
            }
            tracing::warn!(chunk_index = index, "Provider returned no audio content, skipping chunk");
            return Ok(None);
        }

        tracing::debug!(
            chunk_index = index,
            audio_size = audio_bytes.len(),
            "Chunk synthesized"
        );

        Ok(Some(audio_bytes))
    }
}

/// Concatenate per-chunk MP3 streams as-is; decoders play the frames back to back
fn merge_audio(parts: Vec<Option<Vec<u8>>>) -> Vec<u8> {
    let mut merged = Vec::with_capacity(parts.iter().flatten().map(Vec::len).sum());
    for part in parts.into_iter().flatten() {
        merged.extend(part);
    }
    merged
}
