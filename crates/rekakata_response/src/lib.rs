//! Response structuring for RekaKata.
//!
//! Generated text arrives with wildly inconsistent formatting. The
//! [`ResponseStructurer`] recovers a [`StructuredPrompt`](rekakata_core::StructuredPrompt)
//! from it using four independent extractors:
//!
//! - **Master prompt** - lines following the `MASTER PROMPT` marker
//! - **Visual specifications** - pipe-delimited table rows in the visual section
//! - **Script** - hook, body and CTA sections found by [`SectionMatcher`]s
//! - **Hashtags** - `#tag` tokens in the hashtag section
//!
//! None of them fail. A missing section leaves its field absent, except
//! hashtags, which fall back to the trending bundle.
//!
//! The [`export`] module renders structured prompts as Markdown or JSON.
//!
//! # Example
//!
//! ```
//! use rekakata_core::{LanguageCode, TrendingBundle};
//! use rekakata_response::ResponseStructurer;
//!
//! let text = "# SCRIPT\n## Hook [0:00-0:03]\nStop scrolling!\n\n## Body [0:03-0:45]\nThree steps.";
//! let prompt = ResponseStructurer::new().structure(text, &TrendingBundle::default(), LanguageCode::english());
//! assert_eq!(prompt.script().hook().as_deref(), Some("Stop scrolling!"));
//! assert_eq!(prompt.script().cta(), &None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod export;
mod hashtags;
mod master;
mod script;
mod structurer;
mod visual;

pub use export::{ExportFormat, NOT_AVAILABLE, render, render_json, render_markdown};
pub use hashtags::extract_hashtags;
pub use master::extract_master_prompt;
pub use script::{HeadingStyle, SectionMatch, SectionMatcher, extract_script};
pub use structurer::ResponseStructurer;
pub use visual::extract_visual_specs;
