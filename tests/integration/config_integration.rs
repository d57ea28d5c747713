//! Integration tests for configuration loading

use super::test_utils::write_file;
use readmegen::cli::{Commands, RunContext, RunOutcome};
use readmegen::config::{ConfigLoader, WORKSPACE_CONFIG_FILE};
use readmegen::error::AppError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_workspace_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        temp_dir.path(),
        WORKSPACE_CONFIG_FILE,
        r#"
[scan]
ignore = ["vendor"]
snippet_files = ["go.mod"]

[generator]
model = "gemini-2.5-pro"

[output]
path = "docs/README.md"
"#,
    );

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert!(config.scan.ignore.prunes_dir("vendor"));
    assert!(!config.scan.ignore.prunes_dir("node_modules"));
    assert!(config.scan.snippet_files.contains("go.mod"));
    assert_eq!(config.generator.model, "gemini-2.5-pro");
    assert_eq!(config.generator.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.output.path, PathBuf::from("docs/README.md"));
}

#[test]
fn test_run_context_uses_workspace_scan_settings() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), WORKSPACE_CONFIG_FILE, "[scan]\nignore = [\"vendor\"]\n");
    write_file(temp_dir.path(), "vendor/lib.go", "");
    write_file(temp_dir.path(), "node_modules/kept.js", "");

    let ctx = RunContext::new(temp_dir.path().to_path_buf(), None).unwrap();
    let output = ctx.execute(&Commands::Scan).unwrap();

    assert_eq!(output.outcome, RunOutcome::Ran);
    assert!(!output.message.contains("lib.go"));
    assert!(output.message.contains("kept.js"));
}

#[test]
fn test_explicit_config_file_replaces_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), WORKSPACE_CONFIG_FILE, "[generator]\nmodel = \"from-workspace\"\n");
    let explicit = temp_dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[generator]\nmodel = \"from-explicit\"\n").unwrap();

    let ctx = RunContext::new(temp_dir.path().to_path_buf(), Some(explicit)).unwrap();
    assert_eq!(ctx.config().generator.model, "from-explicit");

    let rendered = ctx.execute(&Commands::Config).unwrap().message;
    assert!(rendered.contains("model = \"from-explicit\""));
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        temp_dir.path(),
        WORKSPACE_CONFIG_FILE,
        "[generator]\nbase_url = \"not a url\"\n\n[logging]\nlevel = \"chatty\"\n",
    );

    let err = RunContext::new(temp_dir.path().to_path_buf(), None)
        .err()
        .expect("invalid config should fail");
    match err {
        AppError::ConfigError(msg) => {
            assert!(msg.contains("generator"));
            assert!(msg.contains("logging"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_malformed_toml_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), WORKSPACE_CONFIG_FILE, "[scan\nignore = ");

    assert!(matches!(
        RunContext::new(temp_dir.path().to_path_buf(), None),
        Err(AppError::ConfigError(_))
    ));
}
