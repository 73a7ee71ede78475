/*!
 * Document collection over a directory tree
 */

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::classifier::{is_text_file, read_file_content};
use crate::exclude::ExclusionMatcher;
use crate::types::Document;
use crate::utils::sibling_order;

/// Collects the text files under a root directory
pub struct Scanner<'a> {
    /// Absolute root; document sources are relative to it
    root: PathBuf,
    /// Exclusion rules applied during the walk
    matcher: &'a ExclusionMatcher,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner. `root` should already be resolved.
    pub fn new(root: impl Into<PathBuf>, matcher: &'a ExclusionMatcher) -> Self {
        Self {
            root: root.into(),
            matcher,
        }
    }

    /// Walk the tree and return the text documents in display order
    ///
    /// Each directory yields its subdirectories before its files, so
    /// documents follow the order of file lines in the rendered tree.
    /// Unreadable directories are skipped; unreadable files still become
    /// documents carrying the read error.
    pub fn collect(&self) -> Vec<Document> {
        let mut documents = Vec::new();
        let mut walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by(compare_entries)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.matcher.is_excluded(entry.path()));

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable path");
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                if entry.depth() > 0
                    && self
                        .matcher
                        .is_excluded_content_str(&entry.path().to_string_lossy())
                {
                    debug!(path = %entry.path().display(), "pruning excluded directory content");
                    walker.skip_current_dir();
                }
                continue;
            }

            // Symlinks count only when they resolve to a regular file
            let path = entry.path();
            if !path.is_file() {
                debug!(path = %path.display(), "skipping non-regular file");
                continue;
            }

            if !is_text_file(path) {
                debug!(path = %path.display(), "skipping binary file");
                continue;
            }

            documents.push(Document {
                index: documents.len() + 1,
                source: self.relative_source(path),
                content: read_file_content(path),
            });
        }

        documents
    }

    fn relative_source(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

fn compare_entries(a: &DirEntry, b: &DirEntry) -> std::cmp::Ordering {
    let a_name = a.file_name().to_string_lossy();
    let b_name = b.file_name().to_string_lossy();
    sibling_order(
        (a.file_type().is_dir(), a_name.as_ref()),
        (b.file_type().is_dir(), b_name.as_ref()),
    )
}
