/*!
 * Tag-wrapped output
 */

use std::path::Path;

use quick_xml::escape::escape;

use super::Gathered;
use crate::exclude::ExclusionMatcher;
use crate::tree::Tree;
use crate::types::Document;

const CONTENT_INDENT: &str = "      ";

/// Render `<folder_structure>` and `<documents>` sections
pub fn format_xml(root: &Path, matcher: &ExclusionMatcher, include_structure: bool) -> String {
    let gathered = Gathered::new(root, matcher, include_structure);
    let mut out = String::new();
    if let Some(tree) = &gathered.tree {
        push_structure(&mut out, tree);
    }
    push_documents(&mut out, &gathered.documents);
    out
}

pub(super) fn push_structure(out: &mut String, tree: &Tree) {
    out.push_str("<folder_structure>\n");
    out.push_str(&tree.to_string());
    out.push_str("\n</folder_structure>\n");
}

pub(super) fn push_documents(out: &mut String, documents: &[Document]) {
    out.push_str("<documents>\n");
    for document in documents {
        out.push_str(&format!("  <document index=\"{}\">\n", document.index));
        out.push_str(&format!("    <source>{}</source>\n", escape(document.source.as_str())));
        out.push_str("    <document_content>\n");
        for line in document.content.lines() {
            out.push_str(CONTENT_INDENT);
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("    </document_content>\n");
        out.push_str("  </document>\n");
    }
    out.push_str("</documents>");
}
