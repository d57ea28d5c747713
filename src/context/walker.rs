//! Filesystem walker for the repository scan

use crate::ignore::IgnoreSet;
use std::cmp::Ordering;
use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem entry types, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A directory that was descended into. `depth` is 0 for the root.
    Directory {
        path: PathBuf,
        name: String,
        depth: usize,
    },
    /// A file that survived the ignore rules. `depth` counts from the root.
    File {
        path: PathBuf,
        name: String,
        depth: usize,
    },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Directory { name, .. } | Entry::File { name, .. } => name,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Entry::Directory { depth, .. } | Entry::File { depth, .. } => *depth,
        }
    }
}

/// Filesystem walker
///
/// Walks depth-first. Within each directory the files come first, then every
/// subdirectory followed by its whole subtree.
pub struct Walker<'a> {
    root: PathBuf,
    ignore: &'a IgnoreSet,
    sort_entries: bool,
    follow_symlinks: bool,
}

impl<'a> Walker<'a> {
    pub fn new(root: PathBuf, ignore: &'a IgnoreSet) -> Self {
        Self {
            root,
            ignore,
            sort_entries: true,
            follow_symlinks: false,
        }
    }

    /// Sort siblings by name. When off, siblings keep the order the OS listed them in.
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.sort_entries = yes;
        self
    }

    pub fn follow_symlinks(mut self, yes: bool) -> Self {
        self.follow_symlinks = yes;
        self
    }

    /// Walk the tree and collect every rendered entry.
    ///
    /// Unreadable entries are logged and skipped; the walk itself never fails.
    pub fn walk(&self) -> Vec<Entry> {
        let sort_entries = self.sort_entries;
        let ignore = self.ignore;
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.follow_symlinks)
            .sort_by(move |a, b| sibling_order(a, b, sort_entries))
            .into_iter()
            .filter_entry(|entry| !is_pruned(entry, ignore));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(
                        path = ?e.path(),
                        error = %e,
                        "Skipping unreadable entry during scan"
                    );
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path().to_path_buf();
            let depth = entry.depth();

            if is_unfollowed_dir_link(&entry) {
                debug!(link = %name, "Skipping symlinked directory");
            } else if entry.file_type().is_dir() {
                entries.push(Entry::Directory { path, name, depth });
            } else if self.ignore.excludes_file(&name) {
                debug!(file = %name, "Excluding file matched by ignore pattern");
            } else {
                entries.push(Entry::File { path, name, depth });
            }
        }

        entries
    }
}

/// Files before directories. Listing order is otherwise kept unless sorting by name.
fn sibling_order(a: &DirEntry, b: &DirEntry, by_name: bool) -> Ordering {
    let kind = a.file_type().is_dir().cmp(&b.file_type().is_dir());
    if by_name {
        kind.then_with(|| a.file_name().cmp(b.file_name()))
    } else {
        kind
    }
}

/// A symlink to a directory seen while links are not followed. Never descended
/// into and never listed.
fn is_unfollowed_dir_link(entry: &DirEntry) -> bool {
    entry.path_is_symlink() && !entry.file_type().is_dir() && entry.path().is_dir()
}

fn is_pruned(entry: &DirEntry, ignore: &IgnoreSet) -> bool {
    // The root is always walked, whatever it is called.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && ignore.prunes_dir(&entry.file_name().to_string_lossy())
}
