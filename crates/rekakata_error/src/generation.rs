//! Errors raised by the external text generation collaborator.

/// Specific generation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Driver reported a transport, timeout or model failure
    #[display("Generation driver '{}' failed: {}", model, message)]
    Driver {
        /// Model identifier reported by the driver
        model: String,
        /// Error message from the driver
        message: String,
    },
    /// Driver returned nothing usable
    #[display("Generation driver '{}' returned an empty response", _0)]
    EmptyResponse(String),
}

/// Generation error with location tracking.
///
/// Distinct from validation failures: the input was fine, the model call
/// was not.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
