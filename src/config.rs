//! Configuration System
//!
//! Layered configuration for scanning, generation, output, and logging.
//! The API key itself is never part of configuration; only the name of the
//! environment variable that carries it is.

use crate::context::ScanOptions;
use crate::error::AppError;
use crate::logging::LoggingConfig;
use crate::output::DEFAULT_README_PATH;
use crate::provider::{DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_MODEL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadmegenConfig {
    /// Repository scan settings
    #[serde(default)]
    pub scan: ScanOptions,

    /// Text generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Output artifact settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Text generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_model")]
    pub model: String,

    /// Override for the API base URL (defaults to the public Gemini endpoint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: None,
            api_key_env: default_api_key_env(),
        }
    }
}

/// Output artifact settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// README path; relative paths resolve against the workspace root
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_README_PATH)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl OutputConfig {
    pub fn resolve(&self, workspace_root: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            workspace_root.join(&self.path)
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Scan(String),
    Generator(String),
    Output(String),
    Logging(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Scan(msg) => write!(f, "scan: {}", msg),
            ValidationError::Generator(msg) => write!(f, "generator: {}", msg),
            ValidationError::Output(msg) => write!(f, "output: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model cannot be empty".to_string());
        }
        if self.api_key_env.trim().is_empty() {
            return Err("api_key_env cannot be empty".to_string());
        }
        if let Some(ref base_url) = self.base_url {
            let url = reqwest::Url::parse(base_url)
                .map_err(|e| format!("Invalid base_url '{}': {}", base_url, e))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(format!("base_url must be http or https, got '{}'", url.scheme()));
            }
        }
        Ok(())
    }
}

impl ReadmegenConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.scan.read_limit_bytes == 0 {
            errors.push(ValidationError::Scan(
                "read_limit_bytes must be greater than zero".to_string(),
            ));
        }
        if self.scan.display_limit_chars == 0 {
            errors.push(ValidationError::Scan(
                "display_limit_chars must be greater than zero".to_string(),
            ));
        }
        if let Err(e) = self.generator.validate() {
            errors.push(ValidationError::Generator(e));
        }
        if self.output.path.as_os_str().is_empty() {
            errors.push(ValidationError::Output("Output path cannot be empty".to_string()));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into one error.
    pub fn ensure_valid(&self) -> Result<(), AppError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            AppError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::ConfigError(format!("Failed to render configuration: {}", e)))
    }
}
