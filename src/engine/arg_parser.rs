use clap::Parser;
use std::path::PathBuf;

use crate::types::OutputFormat;

/// Byte-value frequency histogram over every file under a directory.
///
/// Options left unset fall back to `.bytefreq.toml` (or `--config`), then to built-in defaults.
#[derive(Clone, Debug, Parser)]
#[command(name = "bytefreq", version)]
#[command(about = "Count byte values across every file under DIR and chart the histogram.")]
pub struct Cli {
    /// Directory to walk. Default: `data`.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Number of reader threads. Default: 4.
    #[arg(long, short = 'w', value_parser = clap::value_parser!(usize))]
    pub workers: Option<usize>,

    /// Capacity of the path queue between the walk and the readers. Default: 4.
    #[arg(long, short = 'q', value_parser = clap::value_parser!(usize))]
    pub queue_capacity: Option<usize>,

    /// Settings file. Default: `.bytefreq.toml` in the current directory, if present.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Follow symbolic links.
    #[arg(long, short = 'f', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub follow_links: Option<bool>,

    /// Read directories in parallel (order of discovery becomes nondeterministic).
    #[arg(long, short = 'p', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub parallel_walk: Option<bool>,

    /// Exclude patterns (glob syntax). Can specify multiple: -e pattern1 pattern2 pattern3
    #[arg(long, short = 'e', num_args = 1..)]
    pub exclude: Vec<String>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to FILE instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Chart all 256 byte values instead of 0-127.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub full_range: Option<bool>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}
