//! Language detection with a deterministic English fallback.

use rekakata_core::LanguageCode;
use tracing::{debug, instrument, warn};
use whatlang::Lang;

/// Classifies text into a language code.
///
/// Implementations must never fail: ambiguous or undetectable text maps
/// to English.
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text`.
    fn detect(&self, text: &str) -> LanguageCode;
}

/// Statistical detector backed by `whatlang`.
#[derive(Debug, Clone, Copy)]
pub struct WhatlangDetector {
    min_confidence: f64,
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
        }
    }
}

impl WhatlangDetector {
    /// Detector accepting results at or above `min_confidence` even when
    /// whatlang does not flag them reliable.
    pub fn with_min_confidence(min_confidence: f64) -> Self {
        Self { min_confidence }
    }
}

impl LanguageDetector for WhatlangDetector {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    fn detect(&self, text: &str) -> LanguageCode {
        if !text.chars().any(char::is_alphabetic) {
            debug!("No alphabetic content, defaulting to English");
            return LanguageCode::english();
        }

        match whatlang::detect(text) {
            Some(info) if info.is_reliable() || info.confidence() >= self.min_confidence => {
                let code = iso_639_1(info.lang());
                debug!(language = code, confidence = info.confidence(), "Detected language");
                LanguageCode::new(code)
            }
            Some(info) => {
                debug!(
                    candidate = info.lang().code(),
                    confidence = info.confidence(),
                    "Ambiguous language, defaulting to English"
                );
                LanguageCode::english()
            }
            None => {
                warn!("Language detection failed, defaulting to English");
                LanguageCode::english()
            }
        }
    }
}

/// Two-letter code for common languages, ISO 639-3 for the rest.
fn iso_639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Ind => "id",
        Lang::Jav => "jv",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Tgl => "tl",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Rus => "ru",
        Lang::Tur => "tr",
        Lang::Pol => "pl",
        other => other.code(),
    }
}
