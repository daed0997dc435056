//! Pipeline context and channels: what the walk needs and the two conduits between stages.

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::path::{Path, PathBuf};

use crate::types::{Opts, Partial};

/// Pool size and queue bound, plus walk mode. Fixed for the whole run.
#[derive(Clone, Copy, Debug)]
pub struct PipelineTuning {
    pub workers: usize,
    pub queue_capacity: usize,
    pub parallel_walk: bool,
}

impl From<&Opts> for PipelineTuning {
    fn from(opts: &Opts) -> Self {
        Self {
            workers: opts.workers,
            queue_capacity: opts.queue_capacity,
            parallel_walk: opts.parallel_walk,
        }
    }
}

/// Everything the walk needs. Owned by the walking thread; nothing in here is shared with workers.
#[derive(Clone, Debug)]
pub struct PipelineContext {
    pub root: PathBuf,
    pub exclude: Vec<String>,
    pub follow_links: bool,
    pub verbose: bool,
}

/// Channels for the pipeline. Walk gets `path_tx`; workers get `path_rx` and `result_tx`;
/// the coordinator keeps `result_rx`.
///
/// `path_*` is the bounded queue (backpressure on the walk). `result_*` is unbounded: each worker
/// sends exactly one [`Partial`], so it never holds more than `workers` items.
pub struct PipelineChannels {
    pub path_tx: Sender<PathBuf>,
    pub path_rx: Receiver<PathBuf>,
    pub result_tx: Sender<Partial>,
    pub result_rx: Receiver<Partial>,
    pub ctx: PipelineContext,
}

pub fn create_pipeline_channels(root: &Path, opts: &Opts, queue_capacity: usize) -> PipelineChannels {
    let (path_tx, path_rx) = bounded::<PathBuf>(queue_capacity);
    let (result_tx, result_rx) = unbounded::<Partial>();

    let ctx = PipelineContext {
        root: root.to_path_buf(),
        exclude: opts.exclude.clone(),
        follow_links: opts.follow_links,
        verbose: opts.verbose,
    };

    PipelineChannels {
        path_tx,
        path_rx,
        result_tx,
        result_rx,
        ctx,
    }
}
