//! CLI route: single route table and run context. Dispatches to domain services and output.

use crate::cli::output::{format_failure, format_skipped, format_success, stage};
use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, ReadmegenConfig};
use crate::context::{build_context, RepositoryContext};
use crate::error::AppError;
use crate::generation::{build_prompt, GenerationResult, ReadmeGenerator};
use crate::output::write_readme;
use crate::provider::{ApiKey, GeminiClient};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How a command run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The command did its work.
    Ran,
    /// Nothing was attempted (no credential).
    Skipped,
    /// Generation was attempted and failed; no file was written.
    Failed,
}

/// Result of one command: the outcome plus the text to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub outcome: RunOutcome,
    pub message: String,
}

impl CommandOutput {
    fn ran(message: String) -> Self {
        Self {
            outcome: RunOutcome::Ran,
            message,
        }
    }

    fn skipped(message: String) -> Self {
        Self {
            outcome: RunOutcome::Skipped,
            message,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            outcome: RunOutcome::Failed,
            message,
        }
    }
}

/// Runtime context for CLI execution: workspace root plus effective configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ReadmegenConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, AppError> {
        if !workspace_root.is_dir() {
            return Err(AppError::WorkspaceNotFound(workspace_root));
        }
        let workspace_root = dunce::canonicalize(&workspace_root)
            .map_err(|_| AppError::WorkspaceNotFound(workspace_root.clone()))?;

        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        config.ensure_valid()?;

        Ok(Self::with_config(workspace_root, config))
    }

    /// Create run context from an already-built configuration.
    pub fn with_config(workspace_root: PathBuf, config: ReadmegenConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> &ReadmegenConfig {
        &self.config
    }

    /// Execute a command.
    ///
    /// Hard errors (bad config, unwritable output) come back as `Err`. A failed
    /// generation is an `Ok` with [`RunOutcome::Failed`].
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, AppError> {
        match command {
            Commands::Generate { output, dry_run } => {
                self.handle_generate(output.as_deref(), *dry_run)
            }
            Commands::Scan => Ok(CommandOutput::ran(self.scan().into_string())),
            Commands::Prompt => Ok(CommandOutput::ran(build_prompt(&self.scan()))),
            Commands::Config => Ok(CommandOutput::ran(self.config.to_toml_string()?)),
        }
    }

    fn scan(&self) -> RepositoryContext {
        build_context(&self.workspace_root, &self.config.scan)
    }

    fn output_path(&self, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(path) => path.to_path_buf(),
            None => self.config.output.resolve(&self.workspace_root),
        }
    }

    fn handle_generate(
        &self,
        output: Option<&Path>,
        dry_run: bool,
    ) -> Result<CommandOutput, AppError> {
        let variable = &self.config.generator.api_key_env;
        let Some(credential) = ApiKey::from_env(variable) else {
            info!(variable = %variable, "Credential not set; skipping generation");
            return Ok(CommandOutput::skipped(format_skipped(variable)));
        };

        stage("1. Scanning repository structure...");
        let context = self.scan();

        let client = match GeminiClient::new(
            self.config.generator.model.clone(),
            self.config.generator.base_url.clone(),
        ) {
            Ok(client) => client,
            Err(e) => return Ok(CommandOutput::failed(format_failure(&e))),
        };
        let generator = ReadmeGenerator::new(Box::new(client), variable.clone());

        stage(&format!(
            "2. Generating README content via {}...",
            generator.describe()
        ));
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::Runtime(format!("Failed to create runtime: {}", e)))?;
        let result = runtime.block_on(generator.generate(&context, Some(&credential)));

        self.finish_generate(result, &self.output_path(output), dry_run)
    }

    fn finish_generate(
        &self,
        result: GenerationResult,
        target: &Path,
        dry_run: bool,
    ) -> Result<CommandOutput, AppError> {
        match result {
            Ok(content) if dry_run => Ok(CommandOutput::ran(content)),
            Ok(content) => {
                write_readme(target, &content)?;
                Ok(CommandOutput::ran(format_success(target)))
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, target = %target.display(), "README left untouched");
                Ok(CommandOutput::failed(format_failure(&e)))
            }
        }
    }
}
