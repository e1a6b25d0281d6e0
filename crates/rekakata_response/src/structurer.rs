//! Generated text to structured prompt.

use crate::{extract_hashtags, extract_master_prompt, extract_script, extract_visual_specs};
use rekakata_core::{LanguageCode, StructuredPrompt, TrendingBundle};
use tracing::{debug, info, instrument};

/// Turns free-form generated text into a [`StructuredPrompt`].
///
/// Structuring never fails. Each field degrades independently: a missing
/// master prompt or script section stays absent, a missing visual table
/// keeps the defaults, and missing hashtags fall back to the bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseStructurer;

impl ResponseStructurer {
    /// Create a structurer.
    pub fn new() -> Self {
        Self
    }

    /// Structure `raw` text generated for a request that used `bundle`.
    ///
    /// The text is kept verbatim as the prompt's raw response.
    #[instrument(skip(self, raw, bundle), fields(text_len = raw.len(), language = %language))]
    pub fn structure(
        &self,
        raw: &str,
        bundle: &TrendingBundle,
        language: LanguageCode,
    ) -> StructuredPrompt {
        let text = raw.replace("\r\n", "\n");

        let master_prompt = extract_master_prompt(&text);
        if master_prompt.is_none() {
            debug!("No master prompt recovered");
        }
        let visual_specs = extract_visual_specs(&text);
        let script = extract_script(&text);
        let hashtags = extract_hashtags(&text, bundle.hashtags());

        info!(
            master_prompt = master_prompt.is_some(),
            script_complete = script.hook().is_some()
                && script.body().is_some()
                && script.cta().is_some(),
            hashtags = hashtags.len(),
            "Structured generated text"
        );

        StructuredPrompt::new(master_prompt, visual_specs, script, hashtags, language, raw)
    }
}
