/*!
 * Regex-based path exclusion
 */

use std::path::{Path, MAIN_SEPARATOR};

use regex::Regex;

use crate::error::{FolderError, Result};

/// Compiled exclusion patterns
///
/// Patterns are searched anywhere in the path string, never anchored to
/// path segments, so `src` also matches `src2/file.py`.
#[derive(Debug, Clone, Default)]
pub struct ExclusionMatcher {
    patterns: Vec<Regex>,
}

impl ExclusionMatcher {
    /// Compile a list of raw patterns
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self::default();
        matcher.extend(patterns)?;
        Ok(matcher)
    }

    /// Compile and append more patterns
    ///
    /// Nothing is added unless every pattern compiles.
    pub fn extend<I, S>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| FolderError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.patterns.extend(compiled);
        Ok(())
    }

    /// Whether no patterns are configured
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Raw pattern strings, in insertion order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    /// Whether the path and everything beneath it is hidden
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let path = path.to_string_lossy();
        self.patterns.iter().any(|re| re.is_match(&path))
    }

    /// Whether a directory keeps its own line but hides its contents
    ///
    /// The search runs against the path with a trailing separator, so a
    /// pattern such as `node_modules/` targets the directory specifically.
    /// Always false for anything that is not a directory.
    pub fn is_excluded_content(&self, path: &Path) -> bool {
        if self.patterns.is_empty() || !path.is_dir() {
            return false;
        }
        self.is_excluded_content_str(&path.to_string_lossy())
    }

    /// Content check for a path already known to be a directory
    pub(crate) fn is_excluded_content_str(&self, dir: &str) -> bool {
        let with_sep = format!("{}{}", dir, MAIN_SEPARATOR);
        self.patterns.iter().any(|re| re.is_match(&with_sep))
    }
}
