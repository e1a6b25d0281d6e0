//! Command-line interface module.

mod analyze;
mod catalog;
mod commands;
mod structure;

pub use analyze::handle_analyze;
pub use catalog::handle_catalog_command;
pub use commands::{CatalogCommands, Cli, Commands, OutputFormat};
pub use structure::handle_structure;
