/*!
 * Text/binary classification of files
 *
 * The decision is a heuristic. Extensionless or unusually encoded files may
 * land on either side.
 */

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::utils::{extension_of, guess_mime_type, TEXT_EXTENSIONS};

/// Number of leading bytes inspected when sniffing content
pub const SNIFF_LEN: u64 = 4096;

/// Share of bytes above 0x7f beyond which a sample counts as binary
const NON_ASCII_THRESHOLD: f64 = 0.3;

/// Decide whether a file should be embedded as text
///
/// A NUL byte in the sample always means binary. Otherwise an allow-listed
/// extension or a `text/*` MIME guess means text, and the remaining files are
/// judged by their share of non-ASCII bytes. A file whose sample cannot be read
/// is binary unless its name already marks it as text, in which case the read
/// failure is reported later as document content.
pub fn is_text_file(path: &Path) -> bool {
    let by_name = is_text_by_name(path);

    let sample = match read_sample(path) {
        Ok(sample) => sample,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not sniff file");
            return by_name;
        }
    };

    if sample.contains(&0) {
        debug!(path = %path.display(), "NUL byte found, treating as binary");
        return false;
    }

    by_name || looks_like_text(&sample)
}

/// Allow-list or MIME-type decision, without touching the file
pub fn is_text_by_name(path: &Path) -> bool {
    if let Some(ext) = extension_of(path) {
        if TEXT_EXTENSIONS.contains(ext.as_str()) {
            return true;
        }
    }

    guess_mime_type(path).is_some_and(|mime| mime.starts_with("text/"))
}

/// Byte-level check on a NUL-free sample
pub fn looks_like_text(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return true;
    }
    let non_ascii = sample.iter().filter(|&&b| b > 127).count();
    (non_ascii as f64) <= sample.len() as f64 * NON_ASCII_THRESHOLD
}

fn read_sample(path: &Path) -> io::Result<Vec<u8>> {
    let mut sample = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut sample)?;
    Ok(sample)
}

/// Read a file as text, replacing invalid UTF-8 sequences
///
/// Never fails: a read error becomes the returned content.
pub fn read_file_content(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => format!("Error reading file: {}", e),
    }
}
