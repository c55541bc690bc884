//! Per-file processing with side effects (minification, copying).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{AssetRoute, FileKind, minify, rewrite};

/// Process one file: minify HTML/CSS/JS, copy everything else.
///
/// The destination directory is created (recursively, idempotently) before
/// any write. Failures carry the source path as context and are isolated
/// per file by the caller; a file that fails leaves no output.
pub fn process_file(route: &AssetRoute) -> Result<()> {
    let dest = route.write_path();
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    match route.kind {
        FileKind::Html => {
            let source = read_text(&route.source)?;
            let minified = minify::minify_html(&source);
            let rewritten = rewrite::rewrite_asset_refs(&minified);
            write_text(&dest, &rewritten)?;
        }
        FileKind::Css => {
            let source = read_text(&route.source)?;
            let minified = minify::minify_css(&source)
                .with_context(|| format!("Failed to minify {}", route.source.display()))?;
            write_text(&dest, &minified)?;
        }
        FileKind::Js => {
            let source = read_text(&route.source)?;
            let minified = minify::minify_js(&source)
                .with_context(|| format!("Failed to minify {}", route.source.display()))?;
            write_text(&dest, &minified)?;
        }
        FileKind::Other => copy_preserving(&route.source, &dest)?,
    }

    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Copy a file byte-for-byte, preserving modification time and permission
/// bits, overwriting any existing destination.
fn copy_preserving(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest)
        .with_context(|| format!("Failed to copy {} to {}", source.display(), dest.display()))?;

    let meta = fs::metadata(source)
        .with_context(|| format!("Failed to stat {}", source.display()))?;
    if let Ok(mtime) = meta.modified() {
        let file = fs::OpenOptions::new()
            .write(true)
            .open(dest)
            .with_context(|| format!("Failed to open {}", dest.display()))?;
        file.set_modified(mtime)
            .with_context(|| format!("Failed to set mtime on {}", dest.display()))?;
    }
    fs::set_permissions(dest, meta.permissions())
        .with_context(|| format!("Failed to set permissions on {}", dest.display()))?;

    Ok(())
}
