//! Trending catalog error types.

/// Kinds of catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CatalogErrorKind {
    /// Catalog resource could not be read
    #[display("Failed to read catalog: {}", _0)]
    FileRead(String),
    /// Catalog document is malformed
    #[display("Failed to parse catalog: {}", _0)]
    Parse(String),
    /// Hashtag table lacks the mandatory `general` category
    #[display("Catalog hashtags have no 'general' category")]
    MissingGeneral,
    /// Update data could not be merged into the catalog
    #[display("Failed to merge catalog update: {}", _0)]
    Merge(String),
    /// Merged catalog could not be written back to storage
    #[display("Failed to persist catalog: {}", _0)]
    Persist(String),
}

/// Catalog error with location tracking.
///
/// # Examples
///
/// ```
/// use rekakata_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::MissingGeneral);
/// assert!(format!("{}", err).contains("general"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The kind of error that occurred
    pub kind: CatalogErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new catalog error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
