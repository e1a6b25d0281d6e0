//! Input analysis for RekaKata.
//!
//! Turns a raw content idea into a [`ValidatedInput`]:
//!
//! 1. **Normalizer** - collapses whitespace, strips markup and neutralizes
//!    script-injection substrings, then enforces length bounds
//! 2. **LanguageDetector** - classifies the text, falling back to English
//! 3. **EntityExtractor** - keyword matching into four fixed categories
//!
//! # Example
//!
//! ```
//! use rekakata_input::InputValidator;
//!
//! let validator = InputValidator::default();
//! let input = validator.validate("Skincare   review for <b>teens</b>").unwrap();
//! assert_eq!(input.sanitized().as_str(), "Skincare review for teens");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entities;
mod language;
mod normalizer;
mod validator;

pub use entities::EntityExtractor;
pub use language::{LanguageDetector, WhatlangDetector};
pub use normalizer::Normalizer;
pub use validator::{InputValidator, ValidatedInput};
