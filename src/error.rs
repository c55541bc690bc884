//! Error types for asset minification.

use thiserror::Error;

/// A minifier engine rejected its input.
///
/// Carries the engine's diagnostics as plain text; the file path is attached
/// by the caller via `anyhow::Context`.
#[derive(Debug, Error)]
pub enum MinifyError {
    /// CSS failed to parse or print.
    #[error("invalid CSS: {0}")]
    Css(String),

    /// JavaScript failed to parse.
    #[error("invalid JavaScript: {0}")]
    Js(String),
}
