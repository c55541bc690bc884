//! sitemin - minify a static site tree into a parallel build directory.

mod asset;
mod build;
mod cli;
mod config;
mod error;
mod logger;
mod utils;

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::BuildConfig;
use utils::plural_count;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = BuildConfig::load(&cli)?;
    let stats = build::build_site(&config, false)?;

    if stats.failed > 0 {
        bail!("{} failed to process", plural_count(stats.failed, "file"));
    }

    Ok(())
}
