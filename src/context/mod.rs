//! Repository context builder.
//!
//! Walks a directory tree and renders it as indented text, with short previews
//! of a few well-known manifest files. The result is the plain-text context
//! handed to the README generator; it is meant for a language model to read,
//! not for machines to parse.

pub mod snippet;
pub mod walker;

use crate::ignore::IgnoreSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

pub use snippet::{read_snippet, SnippetAllowList};
pub use walker::{Entry, Walker};

/// First line of every rendered context.
pub const CONTEXT_HEADER: &str = "Repository File Structure and Content Snippets:\n\n";

/// One nesting level of indentation.
const INDENT_UNIT: &str = "  ";

/// Rendered textual description of a repository tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryContext(String);

impl RepositoryContext {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RepositoryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scan options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Directory names pruned from the walk, and substrings that drop files
    #[serde(default)]
    pub ignore: IgnoreSet,

    /// File names that get a content preview
    #[serde(default)]
    pub snippet_files: SnippetAllowList,

    /// Bytes read from the start of a snippet file
    #[serde(default = "default_read_limit_bytes")]
    pub read_limit_bytes: usize,

    /// Characters of the trimmed snippet that are rendered
    #[serde(default = "default_display_limit_chars")]
    pub display_limit_chars: usize,

    /// Sort siblings by name (false keeps directory listing order)
    #[serde(default = "default_true")]
    pub sort_entries: bool,

    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_read_limit_bytes() -> usize {
    snippet::DEFAULT_READ_LIMIT_BYTES
}

fn default_display_limit_chars() -> usize {
    snippet::DEFAULT_DISPLAY_LIMIT_CHARS
}

fn default_true() -> bool {
    true
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore: IgnoreSet::default(),
            snippet_files: SnippetAllowList::default(),
            read_limit_bytes: default_read_limit_bytes(),
            display_limit_chars: default_display_limit_chars(),
            sort_entries: default_true(),
            follow_symlinks: false,
        }
    }
}

/// Build the repository context for the tree rooted at `root`.
///
/// Never fails: unreadable directories are skipped and unreadable snippet
/// files are rendered as an inline error annotation.
pub fn build_context(root: &Path, options: &ScanOptions) -> RepositoryContext {
    let entries = Walker::new(root.to_path_buf(), &options.ignore)
        .sort_entries(options.sort_entries)
        .follow_symlinks(options.follow_symlinks)
        .walk();

    let mut out = String::from(CONTEXT_HEADER);
    for entry in &entries {
        render_entry(&mut out, entry, options);
    }

    info!(
        root = %root.display(),
        entries = entries.len(),
        bytes = out.len(),
        "Repository context built"
    );
    RepositoryContext(out)
}

fn render_entry(out: &mut String, entry: &Entry, options: &ScanOptions) {
    match entry {
        Entry::Directory { name, depth, .. } => {
            out.push_str(&format!("{}📦 {}/\n", indent(*depth), name));
        }
        Entry::File { path, name, depth } => {
            out.push_str(&format!("{}📄 {}\n", indent(*depth), name));

            if options.snippet_files.contains(name) {
                let annotation = match read_snippet(
                    path,
                    options.read_limit_bytes,
                    options.display_limit_chars,
                ) {
                    Ok(text) => format!("(Snippet: {}...)", text),
                    Err(e) => {
                        debug!(path = %path.display(), error = %e, "Snippet read failed");
                        format!("(Error reading file: {})", e)
                    }
                };
                out.push_str(&format!("{}{}\n", indent(depth + 1), annotation));
            }
        }
    }
}

fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}
