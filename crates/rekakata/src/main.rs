//! RekaKata CLI binary.
//!
//! - Analyze a content idea and show the generation request
//! - Structure and render previously generated text
//! - Inspect and update the trending catalog

use clap::Parser;
use rekakata::{PromptPipeline, Settings, init_logging};

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_analyze, handle_catalog_command, handle_structure};

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::load()?,
    };
    if cli.verbose {
        settings.log_level = "debug".to_string();
    }
    init_logging(&settings)?;

    let pipeline = PromptPipeline::new(&settings);

    match cli.command {
        Commands::Analyze {
            idea,
            platforms,
            format,
        } => {
            handle_analyze(&pipeline, &idea, &platforms, format)?;
        }

        Commands::Structure {
            response,
            idea,
            format,
            platforms,
            output,
        } => {
            handle_structure(
                &pipeline,
                &response,
                idea.as_deref(),
                &format,
                &platforms,
                output.as_deref(),
            )?;
        }

        Commands::Catalog(catalog_cmd) => {
            handle_catalog_command(&pipeline, catalog_cmd)?;
        }
    }

    Ok(())
}
