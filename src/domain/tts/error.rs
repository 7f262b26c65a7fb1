use crate::error::AppError;

pub const MISSING_SSML_MESSAGE: &str = "Missing SSML text";
pub const NO_AUDIO_MESSAGE: &str = "No audio content returned from provider";

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("{}", MISSING_SSML_MESSAGE)]
    MissingSsml,
    #[error("{0}")]
    Provider(String),
    #[error("{}", NO_AUDIO_MESSAGE)]
    EmptyAudio,
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::MissingSsml => AppError::BadRequest(MISSING_SSML_MESSAGE.to_string()),
            TtsServiceError::Provider(msg) => AppError::ExternalService(msg),
            TtsServiceError::EmptyAudio => AppError::ExternalService(NO_AUDIO_MESSAGE.to_string()),
        }
    }
}
