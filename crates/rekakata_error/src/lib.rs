//! Error types for RekaKata.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use rekakata_error::{RekaResult, ValidationError, ValidationErrorKind};
//!
//! fn check(len: usize) -> RekaResult<()> {
//!     Err(ValidationError::new(ValidationErrorKind::LengthOutOfBounds {
//!         min: 5,
//!         max: 2000,
//!         actual: len,
//!     }))?
//! }
//!
//! assert!(check(3).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod export;
mod generation;
mod json;
mod validation;

pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::ConfigError;
pub use error::{RekaError, RekaErrorKind, RekaResult};
pub use export::{ExportError, ExportErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use validation::{ValidationError, ValidationErrorKind};
