//! Engine module: file counting, path filters, rendering and the CLI.

pub mod arg_parser;
pub mod cli;
pub mod counting;
pub mod parallel;
pub mod progress;
pub mod render;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use counting::{FileOutcome, count_file, count_mapped, count_reader};
pub use render::{chart_ranges, render, render_chart, render_json};
pub use tools::{glob_match, is_excluded, resolve_root, should_include_in_walk};
