//! Build pipeline: walk the tree, fan out per-file processing, report.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use rayon::prelude::*;

use crate::asset::{self, AssetRoute, FileKind};
use crate::config::BuildConfig;
use crate::logger::ProgressLine;
use crate::utils::plural_count;
use crate::{debug, log};

/// Outcome of a build run.
#[derive(Debug, Clone, Copy)]
pub struct BuildStats {
    /// Files written to the output tree
    pub processed: usize,
    /// Files that failed to read, minify or write
    pub failed: usize,
}

/// Build the output tree for the configured input root.
///
/// Walking happens up front and any listing failure aborts the run. Per-file
/// work is distributed over the rayon pool; each failure is logged with file
/// context and counted, without affecting the remaining files. The call
/// returns only after every file has settled.
pub fn build_site(config: &BuildConfig, quiet: bool) -> Result<BuildStats> {
    let routes = collect_routes(config)?;
    let progress = create_progress(&routes, quiet);

    let failed = AtomicUsize::new(0);
    routes.par_iter().for_each(|route| {
        let rel = route.relative(&config.root);
        match asset::process_file(route) {
            Ok(()) => {
                debug!(route.kind.label(); "{}", rel);
                if let Some(p) = &progress {
                    p.inc(route.kind.label());
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log!("error"; "{}: {:#}", rel, e);
            }
        }
    });

    if let Some(p) = progress {
        p.finish();
    }

    let failed = failed.into_inner();
    let stats = BuildStats {
        processed: routes.len() - failed,
        failed,
    };

    if !quiet {
        log!("build"; "{} processed", plural_count(stats.processed, "file"));
        if stats.failed > 0 {
            log!("error"; "{} failed", plural_count(stats.failed, "file"));
        }
    }

    Ok(stats)
}

/// Walk the input root and map every file to a route.
///
/// Files under the output directory are skipped unless `include_output` is
/// set; re-running against a tree holding a previous build would otherwise
/// re-minify its own output.
fn collect_routes(config: &BuildConfig) -> Result<Vec<AssetRoute>> {
    asset::collect_files(&config.root)?
        .into_iter()
        .filter(|p| config.include_output || !p.starts_with(&config.output))
        .map(|p| asset::route_from_source(p, &config.root, &config.output))
        .collect()
}

/// Create progress display if not quiet
fn create_progress(routes: &[AssetRoute], quiet: bool) -> Option<ProgressLine> {
    if quiet {
        return None;
    }
    let count = |kind: FileKind| routes.iter().filter(|r| r.kind == kind).count();
    Some(ProgressLine::new(&[
        ("html", count(FileKind::Html)),
        ("css", count(FileKind::Css)),
        ("js", count(FileKind::Js)),
        ("copy", count(FileKind::Other)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_site(dir: &TempDir) {
        fs::write(
            dir.path().join("index.html"),
            "<html>\n<head>\n  <link rel=\"stylesheet\" href=\"style.css\">\n</head>\n<body>\n  <script src=\"app.js\"></script>\n</body>\n</html>\n",
        )
        .unwrap();
        fs::write(dir.path().join("style.css"), "body {\n  color: #ff0000;\n}\n").unwrap();
        fs::write(
            dir.path().join("app.js"),
            "function add(first, second) {\n  return first + second;\n}\nexport { add };\n",
        )
        .unwrap();
        fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
    }

    #[test]
    fn test_build_site_end_to_end() {
        let dir = TempDir::new().unwrap();
        write_site(&dir);

        let config = BuildConfig::with_root(dir.path().to_path_buf());
        let stats = build_site(&config, true).unwrap();
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.processed, 4);

        let build = dir.path().join("build");
        let html = fs::read_to_string(build.join("index.html")).unwrap();
        assert!(html.contains("style.min.css"));
        assert!(html.contains("app.min.js"));

        assert!(build.join("style.min.css").is_file());
        assert!(build.join("app.min.js").is_file());
        assert!(!build.join("style.css").exists());
        assert!(!build.join("app.js").exists());

        assert_eq!(
            fs::read(build.join("logo.png")).unwrap(),
            [0x89, b'P', b'N', b'G']
        );
    }

    #[test]
    fn test_one_bad_file_does_not_stop_the_rest() {
        let dir = TempDir::new().unwrap();
        write_site(&dir);
        fs::write(dir.path().join("bad.js"), "function (").unwrap();

        let config = BuildConfig::with_root(dir.path().to_path_buf());
        let stats = build_site(&config, true).unwrap();
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.processed, 4);

        let build = dir.path().join("build");
        assert!(!build.join("bad.min.js").exists());
        assert!(build.join("style.min.css").is_file());
        assert!(build.join("app.min.js").is_file());
    }

    #[test]
    fn test_hidden_files_are_copied() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".htaccess"), "Deny from all\n").unwrap();

        let config = BuildConfig::with_root(dir.path().to_path_buf());
        let stats = build_site(&config, true).unwrap();
        assert_eq!(stats.processed, 1);
        assert!(dir.path().join("build/.htaccess").is_file());
    }

    #[test]
    fn test_existing_output_dir_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_site(&dir);
        fs::create_dir_all(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("build/old.css"), "a { color: blue; }\n").unwrap();

        let config = BuildConfig::with_root(dir.path().to_path_buf());
        let stats = build_site(&config, true).unwrap();
        assert_eq!(stats.processed, 4);
        assert!(!dir.path().join("build/build").exists());
    }

    #[test]
    fn test_include_output_reprocesses_prior_build() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("build/old.css"), "a { color: blue; }\n").unwrap();

        let mut config = BuildConfig::with_root(dir.path().to_path_buf());
        config.include_output = true;
        let stats = build_site(&config, true).unwrap();
        assert_eq!(stats.processed, 1);
        assert!(dir.path().join("build/build/old.min.css").is_file());
    }

    #[test]
    fn test_empty_tree_builds_nothing() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::with_root(dir.path().to_path_buf());
        let stats = build_site(&config, true).unwrap();
        assert_eq!(stats.processed, 0);
        assert_eq!(stats.failed, 0);
        assert!(!dir.path().join("build").exists());
    }
}
