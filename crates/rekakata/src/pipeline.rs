//! Synchronous stages shared by the engine and the CLI.

use crate::{GenerationRequest, PromptBuilder, Settings};
use derive_getters::Getters;
use rekakata_core::{EntitySet, LanguageCode, StructuredPrompt, TrendingBundle};
use rekakata_error::{CatalogError, RekaResult};
use rekakata_input::{InputValidator, ValidatedInput, WhatlangDetector};
use rekakata_platform::{Platform, PlatformOptimizer};
use rekakata_response::ResponseStructurer;
use rekakata_trending::{
    CatalogData, RandomSource, ThreadRandom, TrendingCatalog, TrendingSelector,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Everything known about an idea before text is generated for it.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct Analysis {
    /// Validated and analysed input
    input: ValidatedInput,
    /// Trending elements selected for the input
    bundle: TrendingBundle,
    /// Target platforms
    platforms: Vec<Platform>,
    /// Request to send to the generation driver
    request: GenerationRequest,
}

/// Validation, trending selection, request building and structuring.
///
/// None of the stages perform I/O apart from the lazy catalog load, so the
/// pipeline can be used without a generation driver.
#[derive(Debug)]
pub struct PromptPipeline {
    validator: InputValidator<WhatlangDetector>,
    catalog: Arc<TrendingCatalog>,
    selector: TrendingSelector,
    optimizer: PlatformOptimizer,
    builder: PromptBuilder,
    structurer: ResponseStructurer,
}

impl PromptPipeline {
    /// Pipeline configured from `settings`, reading the catalog from
    /// `settings.catalog_path` on first use.
    pub fn new(settings: &Settings) -> Self {
        Self::with_catalog(
            settings,
            Arc::new(TrendingCatalog::new(settings.catalog_path.clone())),
        )
    }

    /// Pipeline sharing an existing catalog.
    pub fn with_catalog(settings: &Settings, catalog: Arc<TrendingCatalog>) -> Self {
        Self {
            validator: InputValidator::new(
                settings.length_bounds(),
                WhatlangDetector::default(),
            ),
            catalog,
            selector: TrendingSelector::new(settings.format_matching),
            optimizer: settings.platform_optimizer(),
            builder: PromptBuilder::new(settings.generation.clone()),
            structurer: ResponseStructurer::new(),
        }
    }

    /// Shared trending catalog.
    pub fn catalog(&self) -> &Arc<TrendingCatalog> {
        &self.catalog
    }

    /// Optimizer for the default platforms.
    pub fn optimizer(&self) -> &PlatformOptimizer {
        &self.optimizer
    }

    /// Request builder.
    pub fn builder(&self) -> &PromptBuilder {
        &self.builder
    }

    /// Validate and analyse a raw idea.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the sanitized text is out of bounds.
    pub fn validate(&self, text: &str) -> RekaResult<ValidatedInput> {
        Ok(self.validator.validate(text)?)
    }

    /// Select trending elements with thread-local randomness.
    pub fn select_trending(
        &self,
        entities: &EntitySet,
        language: &LanguageCode,
    ) -> TrendingBundle {
        self.select_trending_with(entities, language, &mut ThreadRandom)
    }

    /// Select trending elements with an explicit random source.
    pub fn select_trending_with(
        &self,
        entities: &EntitySet,
        language: &LanguageCode,
        rng: &mut dyn RandomSource,
    ) -> TrendingBundle {
        let catalog = self.catalog.snapshot();
        self.selector.select(entities, language, &catalog, rng)
    }

    /// Optimizer for `platforms`, or the default one when none are given.
    pub fn optimizer_for(&self, platforms: &[Platform]) -> PlatformOptimizer {
        if platforms.is_empty() {
            self.optimizer.clone()
        } else {
            PlatformOptimizer::new(platforms.to_vec())
        }
    }

    /// Validate `idea`, select trending elements and build the request.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the sanitized idea is out of bounds.
    pub fn analyze(&self, idea: &str, platforms: &[Platform]) -> RekaResult<Analysis> {
        self.analyze_with(idea, platforms, &mut ThreadRandom)
    }

    /// [`analyze`](Self::analyze) with an explicit random source.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the sanitized idea is out of bounds.
    #[instrument(skip(self, idea, rng), fields(platforms = platforms.len()))]
    pub fn analyze_with(
        &self,
        idea: &str,
        platforms: &[Platform],
        rng: &mut dyn RandomSource,
    ) -> RekaResult<Analysis> {
        let input = self.validate(idea)?;
        let bundle = self.select_trending_with(input.entities(), input.language(), rng);

        let optimizer = self.optimizer_for(platforms);
        let specs = optimizer.optimize_all();
        let request = self.builder.build(
            input.sanitized().as_str(),
            input.language(),
            input.entities(),
            &bundle,
            &specs,
        );

        info!(
            language = %input.language(),
            platforms = specs.len(),
            "Idea analysed"
        );

        Ok(Analysis {
            input,
            bundle,
            platforms: optimizer.platforms().to_vec(),
            request,
        })
    }

    /// Structure generated text produced for `bundle`.
    pub fn structure(
        &self,
        text: &str,
        bundle: &TrendingBundle,
        language: LanguageCode,
    ) -> StructuredPrompt {
        self.structurer.structure(text, bundle, language)
    }

    /// Deep-merge `patch` into the catalog and persist it.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if the patch is not an object, the merged
    /// document is invalid, or it cannot be written.
    pub fn update_catalog(
        &self,
        patch: serde_json::Value,
    ) -> Result<Arc<CatalogData>, CatalogError> {
        self.catalog.update(patch)
    }
}
