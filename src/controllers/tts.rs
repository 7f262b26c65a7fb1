use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use base64::Engine;
use std::sync::Arc;

use crate::{
    domain::tts::{TtsRequest, TtsResponse, TtsService, TtsServiceApi, TtsServiceError},
    error::AppResult,
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /tts - Convert SSML to base64 MP3 audio
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        body: Bytes,
    ) -> AppResult<(StatusCode, Json<TtsResponse>)> {
        // Browsers often send JSON as text/plain, so the content type is not checked
        let request = TtsRequest::from_body(&body).ok_or(TtsServiceError::MissingSsml)?;

        let result = controller.tts_service.synthesize(request).await?;

        tracing::info!(
            voice = result.voice.name,
            chunk_count = result.chunk_count,
            audio_size_bytes = result.audio_data.len(),
            "TTS response ready"
        );

        let audio_content = base64::engine::general_purpose::STANDARD.encode(&result.audio_data);

        Ok((StatusCode::OK, Json(TtsResponse { audio_content })))
    }

    /// OPTIONS /tts - CORS preflight; headers come from the router's CORS layers
    pub async fn preflight() -> StatusCode {
        StatusCode::OK
    }
}
