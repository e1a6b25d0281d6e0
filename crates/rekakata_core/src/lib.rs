//! Core data types for RekaKata.
//!
//! These are the records passed between the pipeline stages: the
//! normalized user idea, the extracted entities, the trending bundle
//! selected from the catalog, and the structured prompt recovered from
//! generated text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bundle;
mod catalog_entry;
mod entity;
mod input;
mod language;
mod prompt;

pub use bundle::{MAX_CTAS, MAX_HASHTAGS, MAX_HOOKS, MAX_SOUNDS, TrendingBundle};
pub use catalog_entry::{FormatEntry, SoundEntry, StyleEntry};
pub use entity::{EntityCategory, EntitySet};
pub use input::{LengthBounds, MAX_INPUT_LENGTH, MIN_INPUT_LENGTH, NormalizedInput};
pub use language::LanguageCode;
pub use prompt::{
    DEFAULT_ASPECT_RATIO, Script, ScriptField, StructuredPrompt, VisualField, VisualSpecs,
};
