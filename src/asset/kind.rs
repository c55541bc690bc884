//! File kind classification.

use std::ffi::OsStr;
use std::path::Path;

/// Kind of file discovered under the input root.
///
/// Computed once per file from the extension and matched exhaustively by the
/// processor. Extension matching is case-sensitive: `.HTML` is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Minified in place, same filename.
    Html,
    /// Minified and renamed to `.min.css`.
    Css,
    /// Minified and renamed to `.min.js`.
    Js,
    /// Copied verbatim.
    Other,
}

impl FileKind {
    /// Classify a file by its extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some("html") => Self::Html,
            Some("css") => Self::Css,
            Some("js") => Self::Js,
            _ => Self::Other,
        }
    }

    /// Short label for progress counters and verbose logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
            Self::Other => "copy",
        }
    }
}
