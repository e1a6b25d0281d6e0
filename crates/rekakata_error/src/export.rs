//! Export error types.

/// Kinds of export failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// No prompt has been generated in this session
    #[display("No previously generated prompt to export")]
    NothingGenerated,
    /// Rendering to the requested format failed
    #[display("Failed to serialize export: {}", _0)]
    Serialize(String),
    /// Reading generated text to structure failed
    #[display("Failed to read generated text: {}", _0)]
    Read(String),
    /// Writing the export file failed
    #[display("Failed to write export: {}", _0)]
    Write(String),
    /// Requested export format is unknown
    #[display("Unsupported export format: {}", _0)]
    UnsupportedFormat(String),
}

/// Export error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
