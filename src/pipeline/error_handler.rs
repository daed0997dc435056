use log::{info, warn};
use std::path::PathBuf;
use std::time::Duration;

use crate::types::ScanStats;

/// End-of-run report: one info summary, then a warning if anything was skipped.
/// Each skipped walk path is listed when verbose (they were already warned about as they happened).
pub fn report_run_summary(
    verbose: bool,
    stats: &ScanStats,
    total_bytes: u64,
    skipped_paths: &[(PathBuf, String)],
    elapsed: Duration,
) {
    info!(
        "Read {} files ({} bytes) in {:.2?}",
        stats.files_read, total_bytes, elapsed
    );

    let skipped = skipped_paths.len() + stats.files_skipped;
    if skipped > 0 {
        warn!(
            "Skipped {} paths due to permission errors or access issues",
            skipped
        );
        if verbose {
            for (p, msg) in skipped_paths {
                eprintln!("  skipped: {} ({})", p.display(), msg);
            }
        }
    }
    if stats.read_errors > 0 {
        warn!(
            "{} files stopped early on read errors; bytes before the error were counted",
            stats.read_errors
        );
    }
}
