//! Shared test utilities for integration tests

use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Create a file (and its parent directories) under `root`.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A small but realistic repository layout.
pub fn sample_repo(root: &Path) {
    write_file(root, "package.json", "{\n  \"name\": \"sample-app\",\n  \"version\": \"1.0.0\"\n}\n");
    write_file(root, "src/index.js", "console.log('hi');\n");
    write_file(root, "src/util/format.js", "module.exports = {};\n");
    write_file(root, "node_modules/left-pad/index.js", "module.exports = 1;\n");
    write_file(root, ".git/HEAD", "ref: refs/heads/main\n");
    write_file(root, ".gitignore", "node_modules\n");
    write_file(root, "debug.log", "noise\n");
}

/// Body of a successful generateContent response carrying `text`.
pub fn gemini_success(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 20 }
    })
}

/// Body of a Google API error envelope.
pub fn gemini_error(code: u16, message: &str, status: &str) -> Value {
    json!({ "error": { "code": code, "message": message, "status": status } })
}

/// Sets an environment variable for the lifetime of the guard.
/// Each test uses its own variable name, so guards never contend.
pub struct EnvVarGuard {
    name: String,
}

impl EnvVarGuard {
    pub fn set(name: &str, value: &str) -> Self {
        std::env::set_var(name, value);
        Self {
            name: name.to_string(),
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        std::env::remove_var(&self.name);
    }
}
