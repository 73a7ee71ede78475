/*!
 * Delimiter-wrapped output for non-tagged targets
 */

use std::path::Path;

use super::Gathered;
use crate::exclude::ExclusionMatcher;
use crate::tree::display_name;

const DELIMITER: &str = "---";

/// Render the structure as a code block and each document between `---` lines
///
/// Sources are prefixed with the root directory name.
pub fn format_plain(root: &Path, matcher: &ExclusionMatcher, include_structure: bool) -> String {
    let gathered = Gathered::new(root, matcher, include_structure);
    let root_name = display_name(&gathered.root);
    let mut out = String::new();

    if let Some(tree) = &gathered.tree {
        out.push_str("Project Structure:\n```\n");
        out.push_str(&tree.to_string());
        out.push_str("\n```\n\n");
    }

    for document in &gathered.documents {
        out.push_str(&format!("{}/{}\n", root_name, document.source));
        out.push_str(&format!("{}\n{}\n{}\n", DELIMITER, document.content, DELIMITER));
    }

    out
}
