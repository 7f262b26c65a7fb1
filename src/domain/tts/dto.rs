use serde::Serialize;
use serde_json::Value;

/// Request for POST /tts
#[derive(Debug, Clone, PartialEq)]
pub struct TtsRequest {
    pub ssml: String,
    pub voice: Option<String>,
    pub audio: AudioSettings,
}

impl TtsRequest {
    /// Read a request out of a raw body, whatever its declared content type.
    /// A body that is not JSON is treated like one without `ssml`.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| Self::from_json(&value))
    }

    /// Read a request out of an arbitrary JSON body.
    ///
    /// Returns `None` when `ssml` is missing, empty or not a string. A `voice`
    /// that is not a string is treated as absent, and non-numeric audio
    /// settings are ignored.
    pub fn from_json(body: &Value) -> Option<Self> {
        let ssml = body
            .get("ssml")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())?;

        Some(Self {
            ssml: ssml.to_string(),
            voice: body.get("voice").and_then(Value::as_str).map(str::to_string),
            audio: AudioSettings {
                speaking_rate: body.get("speakingRate").and_then(Value::as_f64),
                pitch: body.get("pitch").and_then(Value::as_f64),
            },
        })
    }
}

/// Optional provider audio tuning, forwarded only when set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaking_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
}

/// Response for POST /tts
#[derive(Debug, Serialize)]
pub struct TtsResponse {
    /// Standard base64 of the concatenated MP3 bytes
    #[serde(rename = "audioContent")]
    pub audio_content: String,
}
