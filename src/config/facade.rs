//! Config loading facade: assembles sources in precedence order and deserializes.

use super::merge;
use super::sources::{environment, global_file, workspace_file};
use super::ReadmegenConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Loads [`ReadmegenConfig`] from defaults, files, and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (highest last): defaults, global file, workspace
    /// `.readmegen.toml`, `READMEGEN_*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<ReadmegenConfig, ConfigError> {
        let builder = merge::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: ReadmegenConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit file, skipping the global and workspace files.
    pub fn load_from_file(path: &Path) -> Result<ReadmegenConfig, ConfigError> {
        let builder = merge::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        let builder = environment::add_to_builder(builder);

        let config: ReadmegenConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
