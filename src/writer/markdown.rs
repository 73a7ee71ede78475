/*!
 * Markdown output
 */

use std::path::Path;

use super::Gathered;
use crate::exclude::ExclusionMatcher;

/// Render the structure as a code block and each document as a section
///
/// Code fences are tagged with the file extension as written.
pub fn format_markdown(root: &Path, matcher: &ExclusionMatcher, include_structure: bool) -> String {
    let gathered = Gathered::new(root, matcher, include_structure);
    let mut out = String::new();

    if let Some(tree) = &gathered.tree {
        out.push_str("# Project Structure\n\n```\n");
        out.push_str(&tree.to_string());
        out.push_str("\n```\n\n");
    }

    out.push_str("# File Contents\n\n");
    for document in &gathered.documents {
        let ext = Path::new(&document.source)
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        out.push_str(&format!("## {}\n\n", document.source));
        out.push_str(&format!("```{}\n{}\n```\n\n", ext, document.content));
    }

    out
}
