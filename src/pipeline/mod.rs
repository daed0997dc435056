//! Pipeline components: context, walk loop, workers, merge, error reporting.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod walk;
pub mod worker;

pub use context::{PipelineChannels, PipelineContext, PipelineTuning, create_pipeline_channels};
pub use error_handler::report_run_summary;
pub use orchestrator::{collect_histogram, merge_partials, shutdown_worker_handles};
pub use walk::{
    WalkOutcome, WalkSummary, run_walk, run_walk_loop, to_outcome_jwalk, to_outcome_walkdir,
};
pub use worker::spawn_histogram_workers;
