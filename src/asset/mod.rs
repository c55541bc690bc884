//! Asset classification, path mapping and processing.

mod kind;
pub mod minify;
mod process;
pub mod rewrite;
mod route;
mod scan;

// Types
pub use kind::FileKind;
pub use route::AssetRoute;

// Scanning and mapping (pure functions)
pub use route::route_from_source;
pub use scan::collect_files;

// Processing (side effects)
pub use process::process_file;
