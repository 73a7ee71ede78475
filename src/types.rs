/*!
 * Core types and data structures for folder-to-llm
 */

use std::cmp::Ordering;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;
use strum::Display;

/// A single filesystem entry, read fresh on every walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Entry name (last path component)
    pub name: String,
    /// Absolute path of the entry
    pub path: PathBuf,
    /// Whether the entry is a directory (symlinks are never directories)
    pub is_directory: bool,
}

impl PathEntry {
    /// Sibling ordering: directories first, then case-insensitive name.
    /// The raw name breaks ties so the order never depends on the OS listing.
    pub fn sort_order(&self, other: &Self) -> Ordering {
        crate::utils::sibling_order(
            (self.is_directory, self.name.as_str()),
            (other.is_directory, other.name.as_str()),
        )
    }
}

/// A text file selected for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// 1-based position in traversal order
    pub index: usize,
    /// Path relative to the scan root
    pub source: String,
    /// Full file text, or an `Error reading file: ...` message
    #[serde(rename = "document_content")]
    pub content: String,
}

/// Serialization used for the claude profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Tag-wrapped documents
    #[default]
    Xml,
    /// JSON object with a documents array
    Json,
    /// Markdown sections with fenced code blocks
    Markdown,
}

/// Target model family, selects tag-wrapped or delimiter-wrapped output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum LlmTarget {
    #[default]
    Claude,
    Gemini,
    Openai,
}

impl LlmTarget {
    /// Whether this target takes the `--format` serializations
    pub fn uses_tagged_format(self) -> bool {
        matches!(self, Self::Claude)
    }
}
