//! Logging System
//!
//! Structured logging on top of `tracing`. Level, format, and destination come
//! from configuration and can be overridden by environment variables and CLI
//! flags. Diagnostics go to stderr by default so stdout stays free for the
//! command's own output.

use crate::error::AppError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch; `--quiet` turns this off
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file"); defaults to the platform data dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !VALID_LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid log level: {} (must be one of {})",
                self.level,
                VALID_LEVELS.join(", ")
            ));
        }
        validate_format(&self.format)?;
        parse_output_destination(&self.output)?;
        Ok(())
    }
}

/// Default log file: `<data dir>/readmegen/readmegen.log`.
pub fn default_log_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "readmegen").map(|dirs| dirs.data_dir().join("readmegen.log"))
}

/// Fold the `READMEGEN_LOG*` environment variables into `config`.
///
/// `READMEGEN_LOG` takes filter directives: a bare level sets `level`, and
/// `target=level` pairs land in `modules`. Callers apply CLI flags after this.
pub fn apply_env_overrides(config: &mut LoggingConfig) {
    apply_overrides_from(config, |name| std::env::var(name).ok());
}

fn apply_overrides_from(config: &mut LoggingConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(directives) = lookup("READMEGEN_LOG") {
        apply_directives(config, &directives);
    }
    if let Some(modules) = lookup("READMEGEN_LOG_MODULES") {
        apply_directives(config, &modules);
    }
    if let Some(format) = lookup("READMEGEN_LOG_FORMAT") {
        if validate_format(&format).is_ok() {
            config.format = format;
        }
    }
    if let Some(output) = lookup("READMEGEN_LOG_OUTPUT") {
        config.output = output;
    }
}

fn apply_directives(config: &mut LoggingConfig, directives: &str) {
    for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        match directive.split_once('=') {
            Some((module, level)) => {
                config
                    .modules
                    .insert(module.trim().to_string(), level.trim().to_string());
            }
            None => config.level = directive.to_string(),
        }
    }
}

/// Initialize the logging system from a fully resolved configuration.
///
/// Priority order (highest to lowest), folded by the caller:
/// 1. CLI arguments
/// 2. Environment variables (see [`apply_env_overrides`])
/// 3. Configuration file
/// 4. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), AppError> {
    if config.map(|c| !c.enabled).unwrap_or(false) {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true) && output != Destination::File;

    let writer = match output {
        Destination::Stdout => BoxMakeWriter::new(std::io::stdout),
        Destination::Stderr => BoxMakeWriter::new(std::io::stderr),
        Destination::File => BoxMakeWriter::new(std::sync::Mutex::new(open_log_file(config)?)),
    };

    let base_subscriber = Registry::default().with(filter);

    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| AppError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

fn open_log_file(config: Option<&LoggingConfig>) -> Result<std::fs::File, AppError> {
    let log_file = config
        .and_then(|c| c.file.clone())
        .or_else(default_log_file)
        .ok_or_else(|| {
            AppError::ConfigError("No log file configured and no data directory found".to_string())
        })?;

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            AppError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build the level filter from config
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, AppError> {
    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| AppError::ConfigError(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    Ok(filter)
}

fn validate_format(format: &str) -> Result<(), String> {
    if format != "json" && format != "text" {
        return Err(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        ));
    }
    Ok(())
}

fn determine_format(config: Option<&LoggingConfig>) -> Result<String, AppError> {
    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    validate_format(format).map_err(AppError::ConfigError)?;
    Ok(format.to_string())
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Destination {
    Stdout,
    Stderr,
    File,
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<Destination, AppError> {
    let output = config.map(|c| c.output.as_str()).unwrap_or("stderr");
    parse_output_destination(output).map_err(AppError::ConfigError)
}

fn parse_output_destination(output: &str) -> Result<Destination, String> {
    match output {
        "stdout" => Ok(Destination::Stdout),
        "stderr" => Ok(Destination::Stderr),
        "file" => Ok(Destination::File),
        _ => Err(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        )),
    }
}
