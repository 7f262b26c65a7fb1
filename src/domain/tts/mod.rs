pub mod chunker;
pub mod dto;
pub mod error;
pub mod service;
pub mod voice;

pub use chunker::{split_into_chunks, DEFAULT_MAX_CHUNK_BYTES};
pub use dto::{AudioSettings, TtsRequest, TtsResponse};
pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi, TtsSynthesisResult};
pub use voice::{resolve_voice, ResolvedVoice, DEFAULT_VOICE_ID, VOICE_CATALOG};
