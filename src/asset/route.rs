//! Asset route: source → output mapping.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::FileKind;

/// Route information for one discovered file.
///
/// This is the single source of truth for path mapping: created once per
/// file by the walker, consumed once by the processor.
#[derive(Debug, Clone)]
pub struct AssetRoute {
    /// Source file path (absolute)
    pub source: PathBuf,
    /// Mirrored output path under the output directory, before any
    /// minified-name substitution
    pub output: PathBuf,
    /// File kind controlling the processing branch
    pub kind: FileKind,
}

impl AssetRoute {
    /// Final write path.
    ///
    /// CSS and JS gain a `.min` suffix before the extension at write time;
    /// HTML and copied files keep their name. Stems that already end in
    /// `.min` are not recognized: `foo.min.css` maps to `foo.min.min.css`.
    pub fn write_path(&self) -> PathBuf {
        match self.kind {
            FileKind::Css => self.output.with_extension("min.css"),
            FileKind::Js => self.output.with_extension("min.js"),
            FileKind::Html | FileKind::Other => self.output.clone(),
        }
    }

    /// Path relative to the input root, for log lines.
    pub fn relative<'a>(&'a self, root: &Path) -> std::borrow::Cow<'a, str> {
        self.source
            .strip_prefix(root)
            .unwrap_or(&self.source)
            .to_string_lossy()
    }
}

/// Create an `AssetRoute` for a source file under the input root.
///
/// # Errors
///
/// Returns an error if the source path is not inside the input root.
pub fn route_from_source(source: PathBuf, root: &Path, output_dir: &Path) -> Result<AssetRoute> {
    let relative = source
        .strip_prefix(root)
        .with_context(|| format!("File is not under the input root: {}", source.display()))?;
    let output = output_dir.join(relative);
    let kind = FileKind::from_path(&source);

    Ok(AssetRoute {
        source,
        output,
        kind,
    })
}
