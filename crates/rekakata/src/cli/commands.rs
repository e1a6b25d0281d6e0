//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// RekaKata - structured text-to-video prompts for short-form platforms
#[derive(Parser, Debug)]
#[command(name = "rekakata")]
#[command(about = "Turn short content ideas into platform-optimized text-to-video prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of the layered lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an idea and show the request that would be sent for generation
    Analyze {
        /// The content idea
        idea: String,

        /// Target platforms, comma-separated (defaults from settings)
        #[arg(long, value_delimiter = ',')]
        platforms: Vec<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Structure previously generated text and render it
    Structure {
        /// File containing the generated text
        #[arg(long)]
        response: PathBuf,

        /// Original idea, used for language and hashtag fallback
        #[arg(long)]
        idea: Option<String>,

        /// Render format: md or json
        #[arg(long, default_value = "md")]
        format: String,

        /// Platforms listed in the markdown rendering, comma-separated
        #[arg(long, value_delimiter = ',')]
        platforms: Vec<String>,

        /// Write to a timestamped file in this directory instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Trending catalog commands
    #[command(subcommand)]
    Catalog(CatalogCommands),
}

/// Trending catalog subcommands
#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Print the active catalog as JSON
    Show,

    /// Deep-merge a JSON document into the catalog and save it
    Update {
        /// JSON file holding the partial catalog
        file: PathBuf,
    },
}

/// Output format for analysis
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
