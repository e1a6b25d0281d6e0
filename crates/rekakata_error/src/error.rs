//! Top-level error wrapper types.

use crate::{
    CatalogError, ConfigError, ExportError, GenerationError, JsonError, ValidationError,
};

/// Every error condition a RekaKata operation can surface.
///
/// # Examples
///
/// ```
/// use rekakata_error::{ConfigError, RekaError};
///
/// let err: RekaError = ConfigError::new("bad level").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RekaErrorKind {
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Trending catalog error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// External generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Export error
    #[from(ExportError)]
    Export(ExportError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// RekaKata error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("RekaKata Error: {}", _0)]
pub struct RekaError(Box<RekaErrorKind>);

impl RekaError {
    /// Create a new error from a kind.
    pub fn new(kind: RekaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RekaErrorKind {
        &self.0
    }

    /// True when the caller supplied unusable input.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), RekaErrorKind::Validation(_))
    }
}

impl<T> From<T> for RekaError
where
    T: Into<RekaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for RekaKata operations.
pub type RekaResult<T> = std::result::Result<T, RekaError>;
