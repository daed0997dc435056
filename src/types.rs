//! Public and internal types for the bytefreq API and pipeline.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use std::path::PathBuf;

use crate::histogram::Histogram;
use crate::utils::config::PipelineDefaults;

/// Per-worker file counters. Plain numbers only; errors themselves are logged where they happen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Files opened and read to the end.
    pub files_read: usize,
    /// Files that could not be opened.
    pub files_skipped: usize,
    /// Files whose read stopped early on an I/O error (bytes before the error are counted).
    pub read_errors: usize,
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, rhs: Self) {
        self.files_read += rhs.files_read;
        self.files_skipped += rhs.files_skipped;
        self.read_errors += rhs.read_errors;
    }
}

/// What one worker emits, exactly once, when the path queue is exhausted.
#[derive(Debug)]
pub struct Partial {
    pub worker_id: usize,
    pub histogram: Histogram,
    pub stats: ScanStats,
}

/// Result of a full run: merged histogram plus counters from the walk and the workers.
#[derive(Debug)]
pub struct ScanResult {
    /// Canonical root that was walked.
    pub root: PathBuf,
    pub histogram: Histogram,
    pub stats: ScanStats,
    /// Paths pushed onto the queue by the walk.
    pub path_count: usize,
    /// Paths (or subtrees) the walk could not read, with the error message.
    pub skipped_paths: Vec<(PathBuf, String)>,
}

/// How the final histogram is rendered by the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Text bar charts, 64 byte values per panel.
    #[default]
    Chart,
    /// JSON object with all 256 counters.
    Json,
}

/// Lib-only options for [`histogram_dir`](crate::histogram_dir).
#[derive(Clone, Debug)]
pub struct HistogramOpts {
    /// Worker pool size (> 0).
    pub workers: usize,
    /// Capacity of the bounded path queue (> 0).
    pub queue_capacity: usize,
    /// Follow symbolic links while walking.
    pub follow_links: bool,
    /// Read directories on a rayon pool (jwalk) instead of serially (walkdir).
    pub parallel_walk: bool,
    /// Exclude patterns (glob syntax, e.g. `.git`, `*.log`).
    pub exclude: Vec<String>,
}

impl Default for HistogramOpts {
    fn default() -> Self {
        Self {
            workers: PipelineDefaults::WORKERS,
            queue_capacity: PipelineDefaults::QUEUE_CAPACITY,
            follow_links: false,
            parallel_walk: false,
            exclude: Vec::new(),
        }
    }
}

impl From<&HistogramOpts> for Opts {
    fn from(o: &HistogramOpts) -> Self {
        Opts {
            workers: o.workers,
            queue_capacity: o.queue_capacity,
            follow_links: o.follow_links,
            parallel_walk: o.parallel_walk,
            exclude: o.exclude.clone(),
            ..Opts::default()
        }
    }
}

/// Full options (CLI). Use [`HistogramOpts`] for lib.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Directory to walk.
    pub root: PathBuf,
    /// Worker pool size (> 0).
    pub workers: usize,
    /// Capacity of the bounded path queue (> 0).
    pub queue_capacity: usize,
    /// Follow symbolic links.
    pub follow_links: bool,
    /// Parallel directory reads (jwalk).
    pub parallel_walk: bool,
    /// Exclude patterns (glob syntax).
    pub exclude: Vec<String>,
    /// Verbose output: debug logs, walk progress counter, every skipped path listed.
    pub verbose: bool,
    pub format: OutputFormat,
    /// Chart all 256 byte values instead of 0..=127.
    pub full_range: bool,
    /// Write rendered output here instead of stdout.
    pub output: Option<PathBuf>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            root: PathBuf::from(PipelineDefaults::ROOT),
            workers: PipelineDefaults::WORKERS,
            queue_capacity: PipelineDefaults::QUEUE_CAPACITY,
            follow_links: false,
            parallel_walk: false,
            exclude: Vec::new(),
            verbose: false,
            format: OutputFormat::default(),
            full_range: false,
            output: None,
        }
    }
}

impl Opts {
    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.workers == 0 {
            anyhow::bail!("worker count must be greater than 0");
        }
        if self.queue_capacity == 0 {
            anyhow::bail!("queue capacity must be greater than 0");
        }
        Ok(())
    }
}
