//! Structure command handler.

use rekakata::{
    ExportError, ExportErrorKind, ExportFormat, LanguageDetector, PlatformOptimizer,
    PromptPipeline, RekaResult, TrendingBundle, WhatlangDetector, render, write_export,
};
use std::path::Path;

/// Structure the generated text in `response` and render it.
///
/// With an idea, language and the hashtag fallback come from analysing it;
/// without one, language is detected from the text and no fallback applies.
pub fn handle_structure(
    pipeline: &PromptPipeline,
    response: &Path,
    idea: Option<&str>,
    format: &str,
    platforms: &[String],
    output: Option<&Path>,
) -> RekaResult<()> {
    let format = ExportFormat::from_name(format)?;
    let text = std::fs::read_to_string(response).map_err(|e| {
        ExportError::new(ExportErrorKind::Read(format!("{}: {}", response.display(), e)))
    })?;

    let (language, bundle) = match idea {
        Some(idea) => {
            let input = pipeline.validate(idea)?;
            let bundle = pipeline.select_trending(input.entities(), input.language());
            (input.language().clone(), bundle)
        }
        None => (WhatlangDetector::default().detect(&text), TrendingBundle::default()),
    };

    let structured = pipeline.structure(&text, &bundle, language);

    let optimizer = if platforms.is_empty() {
        pipeline.optimizer().clone()
    } else {
        PlatformOptimizer::from_names(platforms)
    };
    let rendered = render(&structured, &optimizer.optimize_all(), format)?;

    match output {
        Some(dir) => {
            let path = write_export(&rendered, format, dir)?;
            println!("Saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
