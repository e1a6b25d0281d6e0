//! Input validation error types.

/// Specific input validation failures.
///
/// Length is the only condition checked on user input; every other
/// malformation is sanitized away rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Normalized input is shorter or longer than allowed
    #[display(
        "Input must be between {} and {} characters (got {})",
        min,
        max,
        actual
    )]
    LengthOutOfBounds {
        /// Inclusive lower bound in characters
        min: usize,
        /// Inclusive upper bound in characters
        max: usize,
        /// Length of the normalized input in characters
        actual: usize,
    },
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use rekakata_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::LengthOutOfBounds {
///     min: 5,
///     max: 2000,
///     actual: 3,
/// });
/// assert!(format!("{}", err).contains("between 5 and 2000 characters"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}
