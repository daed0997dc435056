//! Bytefreq: byte-value frequency histogram over a directory tree

pub mod engine;
pub mod histogram;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use histogram::{BUCKETS, Histogram};
pub use types::*;

use log::debug;
use std::path::Path;

/// Result alias used by public bytefreq API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: histogram every file under `root` with `opts`.
///
/// Fails only when `root` is missing or cannot be listed, or when `opts` has a zero worker count or
/// queue capacity. Unreadable files and subdirectories are logged and skipped; the returned
/// [`ScanResult`] reflects whatever was read.
///
/// ```ignore
/// let opts = bytefreq::HistogramOpts { workers: 8, ..Default::default() };
/// let result = bytefreq::histogram_dir(Path::new("corpus"), &opts)?;
/// println!("{} bytes, {} newlines", result.histogram.total(), result.histogram[b'\n']);
/// ```
pub fn histogram_dir(root: &Path, opts: &HistogramOpts) -> Result<ScanResult> {
    let opts = Opts {
        root: root.to_path_buf(),
        ..Opts::from(opts)
    };
    let config_str = format!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    debug!("{}", config_str);

    pipeline::collect_histogram(&opts)
}
