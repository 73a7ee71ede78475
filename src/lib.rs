/*!
 * folder-to-llm - Render a directory as a single LLM prompt document
 *
 * The folder structure is drawn as an ASCII tree and the text files are
 * embedded as numbered documents, serialized as XML, JSON, Markdown or a
 * delimiter-wrapped plain layout.
 */

pub mod classifier;
pub mod config;
pub mod confirm;
pub mod error;
pub mod exclude;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use classifier::{is_text_file, read_file_content};
pub use config::{Args, Config};
pub use confirm::{confirm, Decision};
pub use error::{FolderError, Result};
pub use exclude::ExclusionMatcher;
pub use scanner::Scanner;
pub use tree::Tree;
pub use types::{Document, LlmTarget, OutputFormat, PathEntry};
pub use writer::{format_json, format_markdown, format_plain, format_xml, render, RenderOptions};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
