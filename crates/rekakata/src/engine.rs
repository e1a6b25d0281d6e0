//! End-to-end prompt generation.

use crate::{GenerationDriver, PromptPipeline, Settings, write_export};
use derive_getters::Getters;
use parking_lot::Mutex;
use rekakata_core::{StructuredPrompt, TrendingBundle};
use rekakata_error::{
    ExportError, ExportErrorKind, GenerationError, GenerationErrorKind, RekaResult,
};
use rekakata_platform::Platform;
use rekakata_response::{ExportFormat, render_json, render_markdown};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Result of one successful generation.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct GeneratedPrompt {
    /// Structured prompt recovered from the generated text
    structured: StructuredPrompt,
    /// Markdown rendering of `structured`
    markdown: String,
    /// Platforms the prompt was optimized for
    platforms: Vec<Platform>,
    /// Trending elements given to the generator
    bundle: TrendingBundle,
}

/// Orchestrates analysis, generation, structuring and export.
///
/// Keeps the most recent successful result for [`export_last`](Self::export_last).
pub struct PromptEngine<D> {
    pipeline: PromptPipeline,
    driver: D,
    output_dir: PathBuf,
    last: Mutex<Option<GeneratedPrompt>>,
}

impl<D: GenerationDriver> PromptEngine<D> {
    /// Engine configured from `settings`.
    pub fn new(driver: D, settings: &Settings) -> Self {
        Self::from_pipeline(
            driver,
            PromptPipeline::new(settings),
            settings.output_dir.clone(),
        )
    }

    /// Engine around an existing pipeline.
    pub fn from_pipeline(
        driver: D,
        pipeline: PromptPipeline,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        info!(model = driver.model_name(), "Prompt engine initialized");
        Self {
            pipeline,
            driver,
            output_dir: output_dir.into(),
            last: Mutex::new(None),
        }
    }

    /// Stages used by the engine.
    pub fn pipeline(&self) -> &PromptPipeline {
        &self.pipeline
    }

    /// Generation driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate a structured prompt for `idea`.
    ///
    /// An empty `platforms` slice targets the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unusable input, or a generation error
    /// when the driver fails or returns only whitespace. The previously
    /// stored result is kept on failure.
    #[instrument(skip(self, idea), fields(model = self.driver.model_name()))]
    pub async fn generate(
        &self,
        idea: &str,
        platforms: &[Platform],
    ) -> RekaResult<GeneratedPrompt> {
        let analysis = self.pipeline.analyze(idea, platforms)?;

        let text = self.driver.generate(analysis.request()).await?;
        if text.trim().is_empty() {
            warn!("Driver returned an empty response");
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse(
                self.driver.model_name().to_string(),
            ))
            .into());
        }

        let structured = self.pipeline.structure(
            &text,
            analysis.bundle(),
            analysis.input().language().clone(),
        );
        let specs: Vec<_> = analysis.platforms().iter().map(|p| p.spec()).collect();
        let markdown = render_markdown(&structured, &specs);

        let generated = GeneratedPrompt {
            structured,
            markdown,
            platforms: analysis.platforms().clone(),
            bundle: analysis.bundle().clone(),
        };
        *self.last.lock() = Some(generated.clone());

        info!(response_len = text.len(), "Prompt generated");
        Ok(generated)
    }

    /// Most recent successful result.
    pub fn last_generated(&self) -> Option<GeneratedPrompt> {
        self.last.lock().clone()
    }

    /// Write the most recent result to `dir`, or the configured output
    /// directory, and return the file path.
    ///
    /// # Errors
    ///
    /// Returns an export error when nothing has been generated yet or the
    /// file cannot be written.
    #[instrument(skip(self, dir), fields(format = %format))]
    pub fn export_last(&self, format: ExportFormat, dir: Option<&Path>) -> RekaResult<PathBuf> {
        let last = self
            .last_generated()
            .ok_or_else(|| ExportError::new(ExportErrorKind::NothingGenerated))?;

        let content = match format {
            ExportFormat::Markdown => last.markdown,
            ExportFormat::Json => render_json(&last.structured)?,
        };

        Ok(write_export(&content, format, dir.unwrap_or(&self.output_dir))?)
    }
}
