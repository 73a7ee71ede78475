/*!
 * Output formatters for folder-to-llm
 *
 * Every formatter is a pure function of the root, the exclusion rules and
 * the structure flag. The folder structure always lives in its own
 * top-level section; documents are numbered from 1.
 */

mod json;
mod markdown;
mod plain;
mod xml;

pub use json::format_json;
pub use markdown::format_markdown;
pub use plain::format_plain;
pub use xml::format_xml;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FolderError, Result};
use crate::exclude::ExclusionMatcher;
use crate::scanner::Scanner;
use crate::tree::Tree;
use crate::types::{Document, LlmTarget, OutputFormat};

/// Which serialization to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Serialization for tag-wrapped targets
    pub format: OutputFormat,
    /// Target model family
    pub llm: LlmTarget,
    /// Whether the folder structure is part of the output
    pub include_structure: bool,
}

/// Render the output selected by `options`
pub fn render(root: &Path, matcher: &ExclusionMatcher, options: &RenderOptions) -> Result<String> {
    info!(
        root = %root.display(),
        output_format = %options.format,
        llm = %options.llm,
        include_structure = options.include_structure,
        "rendering output"
    );

    if !options.llm.uses_tagged_format() {
        return Ok(format_plain(root, matcher, options.include_structure));
    }

    match options.format {
        OutputFormat::Xml => Ok(format_xml(root, matcher, options.include_structure)),
        OutputFormat::Json => format_json(root, matcher, options.include_structure),
        OutputFormat::Markdown => Ok(format_markdown(root, matcher, options.include_structure)),
    }
}

/// Write rendered output to `path` as UTF-8
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| FolderError::Output {
        path: path.to_path_buf(),
        source,
    })
}

/// Tree and documents gathered once per formatter call
struct Gathered {
    root: PathBuf,
    tree: Option<Tree>,
    documents: Vec<Document>,
}

impl Gathered {
    fn new(root: &Path, matcher: &ExclusionMatcher, include_structure: bool) -> Self {
        let root = resolve_root(root);
        let tree = include_structure.then(|| Tree::render(&root, matcher));
        let documents = Scanner::new(&root, matcher).collect();
        info!(documents = documents.len(), "collected documents");
        Self {
            root,
            tree,
            documents,
        }
    }
}

/// Absolute form of `root`, or `root` itself when it cannot be resolved
pub fn resolve_root(root: &Path) -> PathBuf {
    fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf())
}
