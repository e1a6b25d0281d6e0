//! RekaKata: turn short content ideas into structured, platform-optimized
//! text-to-video prompts.
//!
//! This crate wires the pipeline stages together and re-exports them:
//!
//! - [`rekakata_input`]: normalization, language detection, entity extraction
//! - [`rekakata_trending`]: the trending catalog and element selection
//! - [`rekakata_platform`]: per-platform specifications
//! - [`rekakata_response`]: structuring and rendering generated text
//!
//! Text generation itself sits behind [`GenerationDriver`].
//!
//! # Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use rekakata::{ExportFormat, GenerationDriver, GenerationRequest, PromptEngine, RekaResult, Settings};
//!
//! struct MyDriver;
//!
//! #[async_trait]
//! impl GenerationDriver for MyDriver {
//!     async fn generate(&self, _request: &GenerationRequest) -> RekaResult<String> {
//!         Ok("MASTER PROMPT\nA sunlit unboxing".to_string())
//!     }
//!
//!     fn model_name(&self) -> &str {
//!         "my-model"
//!     }
//! }
//!
//! # async fn run() -> RekaResult<()> {
//! let settings = Settings::load()?;
//! let engine = PromptEngine::new(MyDriver, &settings);
//! let generated = engine.generate("Review skincare untuk remaja", &[]).await?;
//! println!("{}", generated.markdown());
//! engine.export_last(ExportFormat::Json, None)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod engine;
mod observability;
mod output;
mod pipeline;
mod prompt;
mod settings;

pub use driver::{GenerationDriver, GenerationRequest};
pub use engine::{GeneratedPrompt, PromptEngine};
pub use observability::init_logging;
pub use output::write_export;
pub use pipeline::{Analysis, PromptPipeline};
pub use prompt::{PromptBuilder, system_prompt, user_prompt};
pub use settings::{GenerationSettings, Settings};

pub use rekakata_core::*;
pub use rekakata_error::*;
pub use rekakata_input::*;
pub use rekakata_platform::*;
pub use rekakata_response::*;
pub use rekakata_trending::*;
