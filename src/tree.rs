/*!
 * ASCII tree rendering of a directory
 */

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::exclude::ExclusionMatcher;
use crate::types::PathEntry;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Placeholder line for a directory whose children cannot be listed
pub const PERMISSION_DENIED: &str = "[Permission Denied]";

/// Rendered directory tree, one entry per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    lines: Vec<String>,
}

impl Tree {
    /// Render `root` honoring the exclusion rules
    ///
    /// Excluded entries vanish with their subtree. Directories whose content
    /// is excluded keep their line but are not descended into.
    pub fn render(root: &Path, matcher: &ExclusionMatcher) -> Self {
        let mut lines = vec![format!("{}/", display_name(root))];
        render_children(root, matcher, "", &mut lines);
        Self { lines }
    }

    /// Lines in display order, root first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Name shown for the root line; falls back to the full path for `/`
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn render_children(dir: &Path, matcher: &ExclusionMatcher, prefix: &str, lines: &mut Vec<String>) {
    let children = match list_children(dir, matcher) {
        Ok(children) => children,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot list directory");
            let placeholder = if e.kind() == io::ErrorKind::PermissionDenied {
                PERMISSION_DENIED.to_string()
            } else {
                format!("[Unreadable: {}]", e)
            };
            lines.push(format!("{}{}{}", prefix, LAST_BRANCH, placeholder));
            return;
        }
    };

    let count = children.len();
    for (idx, child) in children.iter().enumerate() {
        let is_last = idx + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        if !child.is_directory {
            lines.push(format!("{}{}{}", prefix, connector, child.name));
            continue;
        }

        lines.push(format!("{}{}{}/", prefix, connector, child.name));
        if matcher.is_excluded_content_str(&child.path.to_string_lossy()) {
            debug!(path = %child.path.display(), "directory content excluded");
            continue;
        }
        let extension = if is_last { SPACE } else { PIPE };
        render_children(&child.path, matcher, &format!("{}{}", prefix, extension), lines);
    }
}

/// Non-excluded children of `dir`, sorted for display
///
/// Entries whose type cannot be read are dropped; only the listing itself
/// can fail.
pub fn list_children(dir: &Path, matcher: &ExclusionMatcher) -> io::Result<Vec<PathEntry>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if matcher.is_excluded(&path) {
            continue;
        }
        let is_directory = match entry.file_type() {
            Ok(file_type) => file_type.is_dir(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping entry of unknown type");
                continue;
            }
        };
        children.push(PathEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            is_directory,
        });
    }
    children.sort_by(PathEntry::sort_order);
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fixture() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src").join("nested")).unwrap();
        fs::create_dir(root.join("build")).unwrap();
        fs::write(root.join("src").join("main.rs"), "fn main() {}\n").unwrap();
        fs::write(root.join("src").join("nested").join("deep.txt"), "deep\n").unwrap();
        fs::write(root.join("build").join("out.o"), "obj").unwrap();
        fs::write(root.join("README.md"), "# readme\n").unwrap();
        dir
    }

    #[test]
    fn test_render_layout() {
        let dir = fixture();
        let tree = Tree::render(dir.path(), &ExclusionMatcher::default());
        let root = display_name(dir.path());

        let expected = vec![
            format!("{}/", root),
            "├── build/".to_string(),
            "│   └── out.o".to_string(),
            "├── src/".to_string(),
            "│   ├── nested/".to_string(),
            "│   │   └── deep.txt".to_string(),
            "│   └── main.rs".to_string(),
            "└── README.md".to_string(),
        ];
        assert_eq!(tree.lines(), expected.as_slice());
        assert_eq!(tree.to_string(), expected.join("\n"));
    }

    #[test]
    fn test_sibling_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Banana"), "").unwrap();
        fs::write(dir.path().join("apple"), "").unwrap();
        fs::create_dir(dir.path().join("Cherry")).unwrap();

        let tree = Tree::render(dir.path(), &ExclusionMatcher::default());
        assert_eq!(
            &tree.lines()[1..],
            &["├── Cherry/", "├── apple", "└── Banana"]
        );
    }

    #[test]
    fn test_content_exclusion_keeps_directory_line() {
        let dir = fixture();
        let matcher = ExclusionMatcher::new(["build/"]).unwrap();
        let tree = Tree::render(dir.path(), &matcher);

        assert_eq!(tree.lines().iter().filter(|l| l.ends_with("build/")).count(), 1);
        assert!(!tree.lines().iter().any(|l| l.contains("out.o")));
        assert_eq!(tree.lines()[1], "├── build/");
        assert_eq!(tree.lines()[2], "├── src/");
    }

    #[test]
    fn test_full_exclusion_removes_subtree() {
        let dir = fixture();
        let matcher = ExclusionMatcher::new(["nested"]).unwrap();
        let tree = Tree::render(dir.path(), &matcher);

        assert!(!tree.to_string().contains("nested"));
        assert!(!tree.to_string().contains("deep.txt"));
        assert!(tree.lines().contains(&"│   └── main.rs".to_string()));
    }

    #[test]
    fn test_line_count_matches_visible_entries() {
        let dir = fixture();
        let tree = Tree::render(dir.path(), &ExclusionMatcher::default());
        // 3 dirs + 4 files + root
        assert_eq!(tree.lines().len(), 8);
    }

    #[test]
    fn test_empty_root() {
        let dir = tempdir().unwrap();
        let tree = Tree::render(dir.path(), &ExclusionMatcher::default());
        assert_eq!(tree.lines().len(), 1);
        assert!(tree.lines()[0].ends_with('/'));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_a_leaf() {
        let dir = fixture();
        std::os::unix::fs::symlink(dir.path().join("src"), dir.path().join("link")).unwrap();

        let tree = Tree::render(dir.path(), &ExclusionMatcher::default());
        assert!(tree.lines().contains(&"├── link".to_string()));
        assert_eq!(tree.lines().len(), 9);
    }

    #[test]
    fn test_display_name_of_filesystem_root() {
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
