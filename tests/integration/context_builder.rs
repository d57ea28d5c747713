//! Integration tests for the repository context builder

use super::test_utils::{sample_repo, write_file};
use readmegen::context::{build_context, ScanOptions, SnippetAllowList, CONTEXT_HEADER};
use readmegen::ignore::IgnoreSet;
use tempfile::TempDir;

#[test]
fn test_sample_repo_rendering() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("sample");
    sample_repo(&root);

    let context = build_context(&root, &ScanOptions::default());

    let expected = [
        "📦 sample/",
        "  📄 debug.log",
        "  📄 package.json",
        "    (Snippet: {\n  \"name\": \"sample-app\",\n  \"version\": \"1.0.0\"\n}...)",
        "  📦 src/",
        "    📄 index.js",
        "    📦 util/",
        "      📄 format.js",
    ]
    .join("\n");
    assert_eq!(context.as_str(), format!("{}{}\n", CONTEXT_HEADER, expected));
}

#[test]
fn test_ignored_directories_hide_whole_subtree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "node_modules/pkg/deep/nested/file.js", "");
    write_file(root, "app/node_modules/inner.js", "");
    write_file(root, "app/main.js", "");

    let context = build_context(root, &ScanOptions::default());
    let text = context.as_str();

    assert!(!text.contains("node_modules"));
    assert!(!text.contains("file.js"));
    assert!(!text.contains("inner.js"));
    assert!(text.contains("📄 main.js"));
}

#[test]
fn test_directory_names_only_match_exactly() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, ".github_templates/issue.md", "");
    write_file(root, ".github/workflows/ci.yml", "");

    let text = build_context(root, &ScanOptions::default()).into_string();

    assert!(text.contains("📦 .github_templates/"));
    assert!(text.contains("📄 issue.md"));
    assert!(!text.contains("ci.yml"));
}

#[test]
fn test_file_patterns_match_as_literal_substrings() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "app.log.old", "");
    write_file(root, "server.log", "");
    write_file(root, "weird*.log.bak", "");
    write_file(root, ".gitkeep", "");

    let text = build_context(root, &ScanOptions::default()).into_string();

    // "*.log" is not a glob: ordinary log files are kept.
    assert!(text.contains("📄 app.log.old"));
    assert!(text.contains("📄 server.log"));
    // Only names literally containing "*.log" are dropped.
    assert!(!text.contains("weird*.log.bak"));
    // ".git" as a substring removes files like .gitkeep.
    assert!(!text.contains(".gitkeep"));
}

#[test]
fn test_snippets_follow_allow_list_only() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "Dockerfile", "FROM rust:1.80\n");
    write_file(root, "requirements.txt", "flask==3.0\n");
    write_file(root, "Makefile", "all:\n\techo hi\n");
    write_file(root, "nested/package.json", "{}");

    let text = build_context(root, &ScanOptions::default()).into_string();

    assert_eq!(text.matches("(Snippet:").count(), 3);
    assert!(text.contains("(Snippet: FROM rust:1.80...)"));
    assert!(text.contains("(Snippet: flask==3.0...)"));
    assert!(text.contains("      (Snippet: {}...)"));
    assert!(!text.contains("echo hi"));
}

#[test]
fn test_snippet_read_errors_do_not_stop_scan() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    std::fs::write(root.join("package.json"), [0xff, 0xfe, 0x00]).unwrap();
    write_file(root, "z_after.txt", "");

    let text = build_context(root, &ScanOptions::default()).into_string();

    assert!(text.contains("(Error reading file:"));
    assert!(text.contains("📄 z_after.txt"));
}

#[test]
fn test_custom_options() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "target/debug/app", "");
    write_file(root, "Cargo.toml", "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n");
    write_file(root, ".git/HEAD", "");

    let options = ScanOptions {
        ignore: IgnoreSet::new(["target"]),
        snippet_files: SnippetAllowList::new(["Cargo.toml"]),
        display_limit_chars: 9,
        ..ScanOptions::default()
    };
    let text = build_context(root, &options).into_string();

    assert!(!text.contains("📦 target/"));
    assert!(text.contains("📦 .git/"));
    assert!(text.contains("(Snippet: [package]...)"));
}

#[test]
fn test_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("empty");
    std::fs::create_dir(&root).unwrap();

    let context = build_context(&root, &ScanOptions::default());

    assert_eq!(context.as_str(), format!("{}📦 empty/\n", CONTEXT_HEADER));
}

#[test]
fn test_missing_root_yields_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let context = build_context(&temp_dir.path().join("missing"), &ScanOptions::default());
    assert_eq!(context.as_str(), CONTEXT_HEADER);
}

#[test]
fn test_sorted_scan_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for name in ["zeta.txt", "alpha.txt", "mid/beta.txt", "mid/aardvark.txt"] {
        write_file(root, name, "");
    }

    let first = build_context(root, &ScanOptions::default());
    let second = build_context(root, &ScanOptions::default());
    assert_eq!(first, second);

    let text = first.as_str();
    assert!(text.find("alpha.txt").unwrap() < text.find("zeta.txt").unwrap());
    assert!(text.find("zeta.txt").unwrap() < text.find("📦 mid/").unwrap());
    assert!(text.find("aardvark.txt").unwrap() < text.find("beta.txt").unwrap());
}
