//! Analyze command handler.

use super::OutputFormat;
use rekakata::{PlatformOptimizer, PromptPipeline, RekaResult};

/// Analyze `idea` and print the selected elements and generation request.
pub fn handle_analyze(
    pipeline: &PromptPipeline,
    idea: &str,
    platforms: &[String],
    format: OutputFormat,
) -> RekaResult<()> {
    let platforms = if platforms.is_empty() {
        Vec::new()
    } else {
        PlatformOptimizer::from_names(platforms).platforms().to_vec()
    };
    let analysis = pipeline.analyze(idea, &platforms)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&analysis).map_err(rekakata::JsonError::from)?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            let input = analysis.input();
            println!("Input:     {}", input.sanitized());
            println!("Language:  {}", input.language());
            println!("Length:    {} characters", input.length());

            println!("\nEntities:");
            if input.entities().is_empty() {
                println!("  (none)");
            }
            for (category, values) in input.entities().iter() {
                if !values.is_empty() {
                    let values: Vec<&str> = values.iter().map(String::as_str).collect();
                    println!("  {}: {}", category, values.join(", "));
                }
            }

            let bundle = analysis.bundle();
            println!("\nTrending:");
            if let Some(format) = bundle.format() {
                println!("  Format:   {}", format.name);
            }
            if let Some(style) = bundle.visual_style() {
                println!("  Style:    {} ({})", style.name, style.style);
            }
            for hook in bundle.hooks() {
                println!("  Hook:     {}", hook);
            }
            for cta in bundle.ctas() {
                println!("  CTA:      {}", cta);
            }
            println!("  Hashtags: {}", bundle.hashtags().join(" "));

            let names: Vec<&str> = analysis.platforms().iter().map(|p| p.display_name()).collect();
            println!("\nPlatforms: {}", names.join(", "));

            let request = analysis.request();
            println!("\n--- System prompt ---\n{}", request.system_prompt);
            println!("\n--- User prompt ---\n{}", request.user_prompt);
        }
    }

    Ok(())
}
