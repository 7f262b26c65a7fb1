use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::tts::{TtsService, TtsServiceApi};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(tts_service): State<Arc<TtsService>>) -> impl IntoResponse {
    if tts_service.is_ready() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "tts": "configured"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "tts": "unconfigured"
            })),
        )
    }
}
