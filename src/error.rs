//! Error types for the README generator.

use std::path::PathBuf;
use thiserror::Error;

/// Failure outcomes of the remote generation step.
///
/// The set is closed: callers branch on the kind, and the `Display` form is the
/// human-readable reason reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{variable} is not set")]
    CredentialMissing { variable: String },

    #[error("Provider returned an error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

impl GenerationError {
    /// Short label for the error kind, used in structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::CredentialMissing { .. } => "credential_missing",
            GenerationError::Service { .. } => "service",
            GenerationError::Transport(_) => "transport",
        }
    }
}

/// Snippet extraction errors. Rendered inline by the context builder, never propagated.
#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("stream did not contain valid UTF-8")]
    InvalidUtf8,
}

/// Application-level errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write {path:?}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Workspace not found: {0:?}")]
    WorkspaceNotFound(PathBuf),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}
