//! Input analysis facade.

use crate::{EntityExtractor, LanguageDetector, Normalizer, WhatlangDetector};
use derive_getters::Getters;
use rekakata_core::{EntitySet, LanguageCode, LengthBounds, NormalizedInput};
use rekakata_error::ValidationError;
use serde::Serialize;
use tracing::{info, instrument};

/// Result of analysing a raw content idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ValidatedInput {
    /// Sanitized text within the length bounds
    sanitized: NormalizedInput,
    /// Detected language
    language: LanguageCode,
    /// Keyword matches per category
    entities: EntitySet,
    /// Length of the sanitized text in characters
    length: usize,
}

/// Runs normalization, language detection and entity extraction.
#[derive(Debug, Clone)]
pub struct InputValidator<D = WhatlangDetector> {
    normalizer: Normalizer,
    detector: D,
    extractor: EntityExtractor,
}

impl Default for InputValidator<WhatlangDetector> {
    fn default() -> Self {
        Self::new(LengthBounds::default(), WhatlangDetector::default())
    }
}

impl<D: LanguageDetector> InputValidator<D> {
    /// Create a validator with explicit bounds and detector.
    pub fn new(bounds: LengthBounds, detector: D) -> Self {
        Self {
            normalizer: Normalizer::new(bounds),
            detector,
            extractor: EntityExtractor::new(),
        }
    }

    /// Normalizer used for the first stage.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Analyse `raw`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the sanitized text falls outside
    /// the configured length bounds. Detection and extraction never fail.
    #[instrument(skip(self, raw), fields(raw_len = raw.len()))]
    pub fn validate(&self, raw: &str) -> Result<ValidatedInput, ValidationError> {
        let sanitized = self.normalizer.normalize(raw)?;
        let language = self.detector.detect(sanitized.as_str());
        let entities = self.extractor.extract(sanitized.as_str());
        let length = sanitized.len();

        info!(
            language = %language,
            entities = entities.len(),
            length,
            "Input validated"
        );

        Ok(ValidatedInput {
            sanitized,
            language,
            entities,
            length,
        })
    }
}
