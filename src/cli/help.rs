//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name used in log fields (e.g. "generate", "scan").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Scan => "scan",
        Commands::Prompt => "prompt",
        Commands::Config => "config",
    }
}
