//! Property tests: ignored directories hide their whole subtree, everything else is listed.

use super::test_utils::write_file;
use proptest::prelude::*;
use readmegen::context::{build_context, ScanOptions};
use readmegen::ignore::IgnoreSet;
use tempfile::TempDir;

const SEGMENTS: &[&str] = &["src", "lib", "docs", "node_modules", ".git", "__pycache__"];

fn arb_dirs() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(SEGMENTS), 0..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_pruning_is_transitive(paths in prop::collection::vec(arb_dirs(), 1..12)) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let ignore = IgnoreSet::default();

        // Unique file names so every file can be looked up in the output.
        let files: Vec<(String, bool)> = paths
            .iter()
            .enumerate()
            .map(|(i, dirs)| {
                let name = format!("file_{:03}.txt", i);
                let mut relative = dirs.join("/");
                if !relative.is_empty() {
                    relative.push('/');
                }
                relative.push_str(&name);
                write_file(root, &relative, "");
                let hidden = dirs.iter().any(|d| ignore.prunes_dir(d));
                (name, hidden)
            })
            .collect();

        let text = build_context(root, &ScanOptions::default()).into_string();

        for (name, hidden) in files {
            prop_assert_eq!(text.contains(&name), !hidden, "file {} hidden={}", name, hidden);
        }
        for pruned in ["node_modules/", ".git/", "__pycache__/"] {
            prop_assert!(!text.contains(pruned));
        }
    }
}
