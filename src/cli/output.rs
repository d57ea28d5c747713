//! CLI output: error mapping and status lines.

use crate::error::{AppError, GenerationError};
use owo_colors::{OwoColorize, Stream};
use std::path::Path;

/// Map domain/service errors to a string for CLI output (stderr).
pub fn map_error(e: &AppError) -> String {
    match e {
        AppError::Generation(inner) => format_failure(inner),
        other => format!(
            "{} {}",
            "error:".if_supports_color(Stream::Stderr, |t| t.style(owo_colors::Style::new().red().bold())),
            other
        ),
    }
}

/// Progress line for a pipeline stage. Goes to stderr so stdout carries only results.
pub fn stage(message: &str) {
    eprintln!("{}", message.if_supports_color(Stream::Stderr, |t| t.dimmed()));
}

/// Success line, printed on stdout.
pub fn format_success(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let line = format!("✅ Successfully generated and updated {}", name);
    line.if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

/// Failure line, printed on stderr.
pub fn format_failure(error: &GenerationError) -> String {
    let line = format!("❌ Failed to generate README: {}", error);
    line.if_supports_color(Stream::Stderr, |t| t.red())
        .to_string()
}

/// Skip notice, printed on stdout.
pub fn format_skipped(variable: &str) -> String {
    let line = format!(
        "{} environment variable not found. Skipping README generation.",
        variable
    );
    line.if_supports_color(Stream::Stdout, |t| t.yellow())
        .to_string()
}
