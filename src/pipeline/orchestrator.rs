use anyhow::Result;
use crossbeam_channel::Receiver;
use log::debug;
use std::thread::JoinHandle;
use std::time::Instant;

use crate::engine::parallel::parallel_walk_handler;
use crate::engine::tools::resolve_root;
use crate::histogram::Histogram;
use crate::pipeline;
use crate::types::{Opts, Partial, ScanResult, ScanStats};

/// Join every worker. All are joined even if one panicked, so no thread outlives the run.
pub fn shutdown_worker_handles(worker_handles: Vec<JoinHandle<()>>) -> Result<()> {
    let total = worker_handles.len();
    let panicked = worker_handles
        .into_iter()
        .map(JoinHandle::join)
        .filter(|joined| joined.is_err())
        .count();
    if panicked > 0 {
        anyhow::bail!("{panicked} of {total} worker threads panicked");
    }
    Ok(())
}

/// Fold every [`Partial`] on `result_rx` into one histogram. Returns once all senders are gone.
/// Returns `(total, summed stats, number of partials)`.
pub fn merge_partials(result_rx: &Receiver<Partial>) -> (Histogram, ScanStats, usize) {
    let mut total = Histogram::new();
    let mut stats = ScanStats::default();
    let mut partials = 0_usize;
    for partial in result_rx.iter() {
        debug!(
            "merging worker {}: {} bytes",
            partial.worker_id,
            partial.histogram.total()
        );
        total.merge_into(&partial.histogram);
        stats += partial.stats;
        partials += 1;
    }
    (total, stats, partials)
}

/// Main orchestrator: histogram every file under `opts.root`.
///
/// Walk (this thread) → bounded path queue → `opts.workers` reader threads → one partial each → merge.
/// The only error before any thread starts is an invalid root or config; per-file and per-directory
/// failures are logged and skipped.
pub fn collect_histogram(opts: &Opts) -> Result<ScanResult> {
    let start = Instant::now();
    opts.validate()?;
    let root = resolve_root(&opts.root)?;
    let tuning = pipeline::PipelineTuning::from(opts);
    parallel_walk_handler(tuning.parallel_walk, tuning.workers, tuning.queue_capacity);
    debug!("Walking {}", root.display());

    let pipeline::PipelineChannels {
        path_tx,
        path_rx,
        result_tx,
        result_rx,
        ctx,
    } = pipeline::create_pipeline_channels(&root, opts, tuning.queue_capacity);

    let worker_handles = pipeline::spawn_histogram_workers(&path_rx, &result_tx, tuning.workers)?;
    // Workers hold the only remaining clones: the queue's receivers and the result senders.
    drop(path_rx);
    drop(result_tx);

    // Returns after every path is queued; dropping path_tx inside closes the queue.
    let walk = pipeline::run_walk(path_tx, &ctx, tuning.parallel_walk);
    debug!("walk done: {} paths queued", walk.path_count);

    // Result channel is closed once the last worker has exited.
    shutdown_worker_handles(worker_handles)?;

    let (histogram, stats, partials) = merge_partials(&result_rx);
    debug!("merged {partials} partials");

    pipeline::report_run_summary(
        opts.verbose,
        &stats,
        histogram.total(),
        &walk.skipped_paths,
        start.elapsed(),
    );

    Ok(ScanResult {
        root,
        histogram,
        stats,
        path_count: walk.path_count,
        skipped_paths: walk.skipped_paths,
    })
}
