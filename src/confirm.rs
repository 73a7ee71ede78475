/*!
 * Interactive confirmation before rendering
 *
 * Shows the tree and lets the operator proceed, abort, or add exclusion
 * patterns and look again.
 */

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::exclude::ExclusionMatcher;
use crate::tree::Tree;

const PROMPT: &str =
    "Process these files? (y/n, or specify additional exclusions with 'exclude: pattern1 pattern2'): ";
const HELP: &str =
    "Please enter 'y' to proceed, 'n' to abort, or 'exclude: pattern1 pattern2' to add exclusions.";
const EXCLUDE_PREFIX: &str = "exclude:";

/// Operator's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Abort,
}

/// One parsed line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Response {
    Yes,
    No,
    Exclude(Vec<String>),
    Unrecognized,
}

impl Response {
    /// Keywords are case-insensitive; patterns keep their case
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("y") {
            return Self::Yes;
        }
        if line.eq_ignore_ascii_case("n") {
            return Self::No;
        }
        match line.get(..EXCLUDE_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(EXCLUDE_PREFIX) => Self::Exclude(
                line[EXCLUDE_PREFIX.len()..]
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
            ),
            _ => Self::Unrecognized,
        }
    }
}

/// Run the confirmation loop
///
/// Patterns the operator adds are appended to `matcher`. End of input
/// counts as declining.
pub fn confirm<R: BufRead, W: Write>(
    root: &Path,
    matcher: &mut ExclusionMatcher,
    mut input: R,
    mut output: W,
) -> Result<Decision> {
    writeln!(output, "Project Structure:")?;
    writeln!(output, "{}", Tree::render(root, matcher))?;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input at confirmation prompt");
            writeln!(output)?;
            return Ok(Decision::Abort);
        }

        match Response::parse(&line) {
            Response::Yes => return Ok(Decision::Proceed),
            Response::No => return Ok(Decision::Abort),
            Response::Exclude(patterns) => {
                writeln!(output, "Adding exclusions: {:?}", patterns)?;
                if let Err(e) = matcher.extend(&patterns) {
                    writeln!(output, "Error: {}", e)?;
                    continue;
                }
                writeln!(output, "\nUpdated Project Structure:")?;
                writeln!(output, "{}", Tree::render(root, matcher))?;
            }
            Response::Unrecognized => writeln!(output, "{}", HELP)?,
        }
    }
}
