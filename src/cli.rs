//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Minify a static site tree into a parallel build directory
#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Directory tree to process (defaults to the current directory)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory name (relative to the input root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path, relative to the input root (default: sitemin.toml)
    #[arg(short = 'C', long, default_value = "sitemin.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Also process files inside an existing output directory
    #[arg(long)]
    pub include_output: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_without_arguments() {
        let cli = Cli::parse_from(["sitemin"]);
        assert!(cli.root.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.include_output);
        assert_eq!(cli.config, PathBuf::from("sitemin.toml"));
    }

    #[test]
    fn test_cli_parses_root_and_flags() {
        let cli = Cli::parse_from(["sitemin", "site", "-o", "dist", "--include-output", "-V"]);
        assert_eq!(cli.root.as_deref(), Some(std::path::Path::new("site")));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("dist")));
        assert!(cli.include_output);
        assert!(cli.verbose);
    }
}
