/*!
 * JSON output
 */

use std::path::Path;

use serde::Serialize;

use super::Gathered;
use crate::error::Result;
use crate::exclude::ExclusionMatcher;
use crate::types::Document;

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    folder_structure: Option<String>,
    documents: &'a [Document],
}

/// Render a pretty-printed object with `folder_structure` and `documents`
pub fn format_json(root: &Path, matcher: &ExclusionMatcher, include_structure: bool) -> Result<String> {
    let gathered = Gathered::new(root, matcher, include_structure);
    let output = JsonOutput {
        folder_structure: gathered.tree.as_ref().map(ToString::to_string),
        documents: &gathered.documents,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
