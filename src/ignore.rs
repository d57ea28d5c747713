//! Ignore rules for the repository scan.
//!
//! A single pattern list drives two different checks. Directories are pruned
//! when their name equals a pattern; files are dropped when their name contains
//! a pattern anywhere. Patterns are plain strings: `*.log` only matches names
//! that literally contain `*.log`.

use serde::{Deserialize, Serialize};

/// Built-in ignore patterns.
pub const DEFAULT_PATTERNS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    ".github",
    ".venv",
    "*.log",
];

/// Fixed set of names and substrings excluded from the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreSet {
    patterns: Vec<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True when a directory with this name must not be descended into.
    pub fn prunes_dir(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p == name)
    }

    /// True when a file with this name must be left out of the output.
    pub fn excludes_file(&self, name: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| !p.is_empty() && name.contains(p.as_str()))
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS.iter().copied())
    }
}
