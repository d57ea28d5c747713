//! README artifact writer.

use crate::error::AppError;
use std::path::Path;
use tracing::info;

/// Default output file, relative to the workspace root.
pub const DEFAULT_README_PATH: &str = "README.md";

/// Overwrite `path` with `content`.
///
/// Callers only pass confirmed generation output; a failed run never reaches this.
pub fn write_readme(path: &Path, content: &str) -> Result<(), AppError> {
    std::fs::write(path, content).map_err(|source| AppError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "README written");
    Ok(())
}
