//! Build configuration for `sitemin.toml`.
//!
//! The config file is optional; every value has a default and CLI flags
//! override file values. The resolved `BuildConfig` carries the normalized
//! input root and is threaded through every component - nothing reads the
//! working directory implicitly after startup.
//!
//! ```toml
//! [build]
//! output = "build"
//! include_output = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::cli::Cli;
use crate::utils::normalize_path;

/// Root structure of `sitemin.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    build: BuildSection,
}

/// The `[build]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BuildSection {
    /// Output directory name, relative to the input root
    output: PathBuf,
    /// Walk into an existing output directory instead of skipping it
    include_output: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from("build"),
            include_output: false,
        }
    }
}

/// Resolved build configuration.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Input root (absolute, normalized)
    pub root: PathBuf,
    /// Output directory (absolute, under the root unless overridden with an
    /// absolute path)
    pub output: PathBuf,
    /// Whether files inside the output directory are processed as inputs
    pub include_output: bool,
}

impl BuildConfig {
    /// Resolve configuration from CLI arguments and an optional config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = normalize_path(cli.root.as_deref().unwrap_or(Path::new(".")));
        ensure!(root.is_dir(), "Input root is not a directory: {}", root.display());

        let config_path = root.join(&cli.config);
        let file = if config_path.is_file() {
            let text = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str::<FileConfig>(&text)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            FileConfig::default()
        };

        let output = cli.output.clone().unwrap_or(file.build.output);
        let include_output = cli.include_output || file.build.include_output;

        Ok(Self {
            output: root.join(output),
            root,
            include_output,
        })
    }

    /// Configuration with defaults for a given root, bypassing the CLI.
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            output: root.join("build"),
            root,
            include_output: false,
        }
    }
}
