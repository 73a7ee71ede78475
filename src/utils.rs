/*!
 * Utility functions and lookup tables for folder-to-llm
 */

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;

/// Extensions that are always treated as text (lowercase, without the dot)
pub static TEXT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "py", "txt", "json", "csv", "md", "html", "css", "js", "cpp", "c", "h", "hpp", "java",
        "xml", "yml", "yaml", "sh", "bat", "ps1", "tex", "ini", "cfg", "conf", "jsx", "ts", "tsx",
        "sql", "php", "rb", "rs", "go", "dart", "swift", "ipynb", "log", "env", "gitignore",
        "toml",
    ]
    .into_iter()
    .collect()
});

/// Extension to MIME type table, initialized once and read-only afterwards
static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Text
        ("txt", "text/plain"),
        ("text", "text/plain"),
        ("asc", "text/plain"),
        ("diff", "text/x-diff"),
        ("patch", "text/x-diff"),
        ("htm", "text/html"),
        ("html", "text/html"),
        ("shtml", "text/html"),
        ("css", "text/css"),
        ("csv", "text/csv"),
        ("tsv", "text/tab-separated-values"),
        ("md", "text/markdown"),
        ("markdown", "text/markdown"),
        ("rst", "text/x-rst"),
        ("xml", "text/xml"),
        ("xsl", "text/xml"),
        ("js", "text/javascript"),
        ("mjs", "text/javascript"),
        ("py", "text/x-python"),
        ("c", "text/x-c"),
        ("h", "text/x-c"),
        ("cc", "text/x-c++src"),
        ("cxx", "text/x-c++src"),
        ("hh", "text/x-c++hdr"),
        ("java", "text/x-java"),
        ("kt", "text/x-kotlin"),
        ("scala", "text/x-scala"),
        ("pl", "text/x-perl"),
        ("pm", "text/x-perl"),
        ("lua", "text/x-lua"),
        ("hs", "text/x-haskell"),
        ("lisp", "text/x-lisp"),
        ("clj", "text/x-clojure"),
        ("ex", "text/x-elixir"),
        ("exs", "text/x-elixir"),
        ("erl", "text/x-erlang"),
        ("cs", "text/x-csharp"),
        ("vb", "text/x-vb"),
        ("r", "text/x-r"),
        ("m", "text/x-objcsrc"),
        ("sgm", "text/sgml"),
        ("sgml", "text/sgml"),
        ("ics", "text/calendar"),
        ("vcf", "text/vcard"),
        ("rtx", "text/richtext"),
        ("etx", "text/x-setext"),
        ("srt", "text/plain"),
        ("vtt", "text/vtt"),
        ("mk", "text/x-makefile"),
        ("cmake", "text/x-cmake"),
        ("graphql", "text/x-graphql"),
        ("proto", "text/x-protobuf"),
        ("svelte", "text/x-svelte"),
        ("vue", "text/x-vue"),
        ("scss", "text/x-scss"),
        ("sass", "text/x-sass"),
        ("less", "text/x-less"),
        // Non-text, listed so the lookup answers definitively
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
        ("svg", "image/svg+xml"),
        ("ico", "image/vnd.microsoft.icon"),
        ("webp", "image/webp"),
        ("pdf", "application/pdf"),
        ("zip", "application/zip"),
        ("gz", "application/gzip"),
        ("tar", "application/x-tar"),
        ("wasm", "application/wasm"),
        ("mp3", "audio/mpeg"),
        ("mp4", "video/mp4"),
    ])
});

/// Lowercased extension of a path, without the leading dot
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Guess a MIME type from the file name alone
pub fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = extension_of(path)?;
    MIME_TYPES.get(ext.as_str()).copied()
}

/// Order two siblings given as `(is_directory, name)`
pub fn sibling_order(a: (bool, &str), b: (bool, &str)) -> Ordering {
    (!a.0)
        .cmp(&!b.0)
        .then_with(|| a.1.to_lowercase().cmp(&b.1.to_lowercase()))
        .then_with(|| a.1.cmp(b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_order_dirs_first_case_insensitive() {
        let mut names = vec![(false, "Banana"), (false, "apple"), (true, "Cherry")];
        names.sort_by(|a, b| sibling_order(*a, *b));
        assert_eq!(names, vec![(true, "Cherry"), (false, "apple"), (false, "Banana")]);
    }

    #[test]
    fn test_sibling_order_tie_breaks_on_raw_name() {
        assert_eq!(sibling_order((false, "A"), (false, "a")), Ordering::Less);
        assert_eq!(sibling_order((false, "a"), (false, "a")), Ordering::Equal);
    }

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type(Path::new("notes.RST")), Some("text/x-rst"));
        assert_eq!(guess_mime_type(Path::new("logo.png")), Some("image/png"));
        assert_eq!(guess_mime_type(Path::new("Makefile")), None);
        assert_eq!(guess_mime_type(Path::new(".env")), None);
    }

    #[test]
    fn test_extension_of_lowercases() {
        assert_eq!(extension_of(Path::new("a/B.PY")).as_deref(), Some("py"));
        assert_eq!(extension_of(Path::new("README")), None);
    }
}
