//! Content previews for a small allow-list of well-known files.

use crate::error::SnippetError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default byte cap for the snippet read.
pub const DEFAULT_READ_LIMIT_BYTES: usize = 500;

/// Default character cap for the rendered snippet.
pub const DEFAULT_DISPLAY_LIMIT_CHARS: usize = 100;

/// Built-in snippet files.
pub const DEFAULT_SNIPPET_FILES: &[&str] = &["package.json", "requirements.txt", "Dockerfile"];

/// Exact file names that get a content preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetAllowList {
    names: Vec<String>,
}

impl SnippetAllowList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.names.iter().any(|n| n == file_name)
    }
}

impl Default for SnippetAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_SNIPPET_FILES.iter().copied())
    }
}

/// Read the head of a file for display.
///
/// At most `read_limit` bytes are read. A character split by that cap is
/// dropped; any other invalid UTF-8 is an error. The result is trimmed and then
/// cut to `display_limit` characters.
pub fn read_snippet(
    path: &Path,
    read_limit: usize,
    display_limit: usize,
) -> Result<String, SnippetError> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(read_limit);
    file.take(read_limit as u64).read_to_end(&mut buf)?;

    let text = decode_prefix(&buf)?;
    Ok(text.trim().chars().take(display_limit).collect())
}

fn decode_prefix(bytes: &[u8]) -> Result<&str, SnippetError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text),
        // error_len() is None only for a truncated sequence at the very end.
        Err(e) if e.error_len().is_none() => {
            std::str::from_utf8(&bytes[..e.valid_up_to()]).map_err(|_| SnippetError::InvalidUtf8)
        }
        Err(_) => Err(SnippetError::InvalidUtf8),
    }
}
