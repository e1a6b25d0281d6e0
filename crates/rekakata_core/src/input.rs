//! Normalized user input.

use rekakata_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Shortest accepted idea, in characters.
pub const MIN_INPUT_LENGTH: usize = 5;

/// Longest accepted idea, in characters.
pub const MAX_INPUT_LENGTH: usize = 2000;

/// Inclusive character bounds applied to normalized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    /// Minimum length in characters
    pub min: usize,
    /// Maximum length in characters
    pub max: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: MIN_INPUT_LENGTH,
            max: MAX_INPUT_LENGTH,
        }
    }
}

impl LengthBounds {
    /// True when `length` lies within the bounds.
    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

/// Sanitized idea text whose length is known to be within bounds.
///
/// The only way to obtain one is [`NormalizedInput::try_new`], so holding a
/// value is proof the length check passed.
///
/// # Examples
///
/// ```
/// use rekakata_core::{LengthBounds, NormalizedInput};
///
/// let input = NormalizedInput::try_new("skincare review", LengthBounds::default()).unwrap();
/// assert_eq!(input.len(), 15);
///
/// assert!(NormalizedInput::try_new("tes", LengthBounds::default()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
pub struct NormalizedInput(String);

impl NormalizedInput {
    /// Wrap already-sanitized text, rejecting it when out of bounds.
    #[track_caller]
    pub fn try_new(
        text: impl Into<String>,
        bounds: LengthBounds,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        let actual = text.chars().count();
        if !bounds.contains(actual) {
            return Err(ValidationError::new(
                ValidationErrorKind::LengthOutOfBounds {
                    min: bounds.min,
                    max: bounds.max,
                    actual,
                },
            ));
        }
        Ok(Self(text))
    }

    /// The sanitized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// True when the text is empty, which a positive minimum rules out.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
