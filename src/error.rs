//! Global error handling for folder-to-llm
//!
//! Only failures that abort a run live here. Unreadable files and
//! directories are handled where they occur and never become a
//! `FolderError`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for folder-to-llm operations
#[derive(Error, Debug)]
pub enum FolderError {
    /// The target path does not exist or is not a directory
    #[error("'{}' is not a valid directory", .0.display())]
    InvalidRoot(PathBuf),

    /// An exclusion pattern failed to compile
    #[error("invalid exclusion pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The rendered output could not be written
    #[error("failed to write output to '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON processing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for folder-to-llm operations
pub type Result<T> = std::result::Result<T, FolderError>;

/// Creates a FolderError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::FolderError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
