//! Catalog command handlers.

use super::CatalogCommands;
use rekakata::{CatalogError, CatalogErrorKind, JsonError, PromptPipeline, RekaResult};

/// Handle catalog subcommands.
pub fn handle_catalog_command(
    pipeline: &PromptPipeline,
    command: CatalogCommands,
) -> RekaResult<()> {
    match command {
        CatalogCommands::Show => {
            let snapshot = pipeline.catalog().snapshot();
            let json = serde_json::to_string_pretty(snapshot.as_ref()).map_err(JsonError::from)?;
            println!("{}", json);
        }
        CatalogCommands::Update { file } => {
            let text = std::fs::read_to_string(&file).map_err(|e| {
                CatalogError::new(CatalogErrorKind::FileRead(format!("{}: {}", file.display(), e)))
            })?;
            let patch: serde_json::Value = serde_json::from_str(&text).map_err(JsonError::from)?;
            let updated = pipeline.update_catalog(patch)?;

            println!("Catalog updated");
            println!("  Formats:        {}", updated.formats().len());
            println!("  Visual styles:  {}", updated.visual_styles().len());
            println!("  Hooks:          {}", updated.hooks().len());
            println!("  CTAs:           {}", updated.ctas().len());
            println!("  Hashtag groups: {}", updated.hashtags().len());
            if let Some(path) = pipeline.catalog().path() {
                println!("  Saved to:       {}", path.display());
            }
        }
    }
    Ok(())
}
