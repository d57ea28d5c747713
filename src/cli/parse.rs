//! CLI parse: clap types for readmegen. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// readmegen - generate a README from the repository tree
#[derive(Parser)]
#[command(name = "readmegen")]
#[command(about = "Generate a repository README from its file tree using a hosted language model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scan the workspace, generate README content, and write it
    Generate {
        /// Write here instead of the configured output path (relative to the current directory)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the generated document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the repository context that would be sent to the model
    Scan,
    /// Print the full prompt that would be sent to the model
    Prompt,
    /// Print the effective configuration as TOML
    Config,
}
