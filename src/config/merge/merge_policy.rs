//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources win key by key: defaults, then the global file, then the
//! workspace file, then the environment. List values replace rather than extend.

use crate::provider::{DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_MODEL};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("generator.model", DEFAULT_GEMINI_MODEL)?
        .set_default("generator.api_key_env", DEFAULT_API_KEY_ENV)?
        .set_default("output.path", crate::output::DEFAULT_README_PATH)
}
