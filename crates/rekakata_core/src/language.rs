//! Language codes.

use serde::{Deserialize, Serialize};

/// Language of the user's idea, as an ISO 639 code (`"en"`, `"id"`, ...).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Wrap a code, lower-casing it.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_lowercase())
    }

    /// English, the fallback for undetectable text.
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// Indonesian.
    pub fn indonesian() -> Self {
        Self("id".to_string())
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for Indonesian, which gets localized prompts and captions.
    pub fn is_indonesian(&self) -> bool {
        self.0 == "id"
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::english()
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
