/// Provider voice used when the requested name is absent or unknown
pub const DEFAULT_VOICE_ID: &str = "en-US-Neural2-B";

/// Legacy voice names and the Google Neural2 voices they map to
pub const VOICE_CATALOG: &[(&str, &str)] = &[
    // English
    ("Brian", "en-GB-Neural2-B"),
    ("Amy", "en-GB-Neural2-A"),
    ("Emma", "en-GB-Neural2-C"),
    ("Joey", "en-US-Neural2-D"),
    ("Justin", "en-US-Neural2-B"),
    ("Matthew", "en-US-Neural2-A"),
    ("Ivy", "en-US-Neural2-F"),
    ("Joanna", "en-US-Neural2-C"),
    ("Salli", "en-US-Neural2-G"),
    ("Nicole", "en-AU-Neural2-A"),
    ("Russell", "en-AU-Neural2-B"),
    ("Raveena", "en-IN-Neural2-A"),
    // European
    ("Vitoria", "pt-PT-Neural2-A"),
    ("Celine", "fr-FR-Neural2-A"),
    ("Karl", "de-DE-Neural2-B"),
    ("Marlene", "de-DE-Neural2-A"),
    ("Giorgio", "it-IT-Neural2-B"),
    ("Bianca", "it-IT-Neural2-A"),
    ("Astrid", "sv-SE-Neural2-A"),
    ("Filiz", "tr-TR-Neural2-A"),
    // Russian
    ("Tatyana", "ru-RU-Neural2-A"),
    ("Maxim", "ru-RU-Neural2-B"),
    ("RussianC", "ru-RU-Neural2-C"),
    ("RussianD", "ru-RU-Neural2-D"),
    // Spanish
    ("Lucia", "es-ES-Neural2-A"),
    ("Enrique", "es-ES-Neural2-B"),
    ("Penelope", "es-US-Neural2-A"),
    ("Miguel", "es-US-Neural2-B"),
    // Arabic
    ("ArabicA", "ar-XA-Neural2-A"),
    ("ArabicB", "ar-XA-Neural2-B"),
    ("ArabicC", "ar-XA-Neural2-C"),
    ("ArabicD", "ar-XA-Neural2-D"),
    // Asian
    ("Mizuki", "ja-JP-Neural2-A"),
    ("Takumi", "ja-JP-Neural2-B"),
    ("Seoyeon", "ko-KR-Neural2-A"),
    ("Aditi", "hi-IN-Neural2-A"),
];

/// A provider voice together with the locale it must be requested with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVoice {
    pub language_code: String,
    pub name: &'static str,
}

impl ResolvedVoice {
    fn from_voice_id(name: &'static str) -> Self {
        Self {
            language_code: language_code_of(name),
            name,
        }
    }
}

impl std::fmt::Display for ResolvedVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.language_code)
    }
}

/// Get the provider voice for a legacy voice name.
/// Exact, case-sensitive match; anything else gets the default voice.
pub fn resolve_voice(voice_name: Option<&str>) -> ResolvedVoice {
    let voice_id = voice_name
        .and_then(|name| {
            VOICE_CATALOG
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, id)| *id)
        })
        .unwrap_or(DEFAULT_VOICE_ID);

    ResolvedVoice::from_voice_id(voice_id)
}

/// First two hyphen-separated segments of a voice id (`en-US-Neural2-B` -> `en-US`)
pub fn language_code_of(voice_id: &str) -> String {
    voice_id.split('-').take(2).collect::<Vec<_>>().join("-")
}
