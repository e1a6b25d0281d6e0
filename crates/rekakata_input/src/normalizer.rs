//! Sanitization and bounds checking of raw input.

use rekakata_core::{LengthBounds, NormalizedInput};
use rekakata_error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("Valid script block regex")
});

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Valid markup tag regex"));

static DANGEROUS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)javascript:", r"(?i)on\w+\s*=", r"(?i)data:text/html"]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Valid dangerous-content regex"))
        .collect()
});

/// Sanitizes raw idea text and enforces its length bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    bounds: LengthBounds,
}

impl Normalizer {
    /// Create a normalizer with the given bounds.
    pub fn new(bounds: LengthBounds) -> Self {
        Self { bounds }
    }

    /// Bounds applied by [`Normalizer::normalize`].
    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Strip markup and injection substrings, then collapse whitespace.
    ///
    /// Injection substrings are removed repeatedly until none remain, so a
    /// pattern nested inside itself cannot reassemble. Never fails; the
    /// result may be empty.
    pub fn sanitize(&self, raw: &str) -> String {
        let text = SCRIPT_BLOCK.replace_all(raw, " ");
        let mut text = MARKUP_TAG.replace_all(&text, "").into_owned();
        while let Some(pattern) = DANGEROUS.iter().find(|p| p.is_match(&text)) {
            text = pattern.replace_all(&text, "").into_owned();
        }
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Sanitize `raw` and check the result's length.
    ///
    /// # Errors
    ///
    /// Returns `LengthOutOfBounds`, carrying both bounds and the actual
    /// length, when the sanitized text is too short or too long.
    #[instrument(skip(self, raw), fields(raw_len = raw.len()))]
    pub fn normalize(&self, raw: &str) -> Result<NormalizedInput, ValidationError> {
        let sanitized = self.sanitize(raw);
        debug!(length = sanitized.chars().count(), "Sanitized input");
        NormalizedInput::try_new(sanitized, self.bounds).inspect_err(|e| {
            warn!(error = %e.kind, "Input length invalid");
        })
    }
}
