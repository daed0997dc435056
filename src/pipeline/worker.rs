use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crate::engine::counting::{FileOutcome, count_file};
use crate::histogram::Histogram;
use crate::types::{Partial, ScanStats};

/// Single histogram worker: count every path from `path_rx` into a private histogram until the queue
/// is closed and drained, then send it on `result_tx` exactly once (all zeros if no file came its way).
fn histogram_worker_loop(worker_id: usize, path_rx: Receiver<PathBuf>, result_tx: Sender<Partial>) {
    let mut histogram = Histogram::new();
    let mut stats = ScanStats::default();

    while let Ok(path) = path_rx.recv() {
        match count_file(&path, &mut histogram) {
            FileOutcome::Complete { .. } => stats.files_read += 1,
            FileOutcome::NotRegular => {
                warn!("skipping {}: not a regular file", path.display());
                stats.files_skipped += 1;
            }
            FileOutcome::OpenFailed(e) => {
                warn!("cannot open {}: {}", path.display(), e);
                stats.files_skipped += 1;
            }
            FileOutcome::ReadFailed { bytes, err } => {
                warn!(
                    "read error in {} after {} bytes: {}",
                    path.display(),
                    bytes,
                    err
                );
                stats.read_errors += 1;
            }
        }
    }

    debug!(
        "worker {worker_id}: queue drained, {} files, {} bytes",
        stats.files_read,
        histogram.total()
    );
    // Coordinator keeps result_rx until every worker is joined.
    let _ = result_tx.send(Partial {
        worker_id,
        histogram,
        stats,
    });
}

/// Spawn `num_workers` histogram workers reading from `path_rx` and reporting on `result_tx`.
/// Caller must drop its own `result_tx` so the result channel closes when the last worker exits.
pub fn spawn_histogram_workers(
    path_rx: &Receiver<PathBuf>,
    result_tx: &Sender<Partial>,
    num_workers: usize,
) -> Result<Vec<JoinHandle<()>>> {
    (0..num_workers)
        .map(|id| {
            let path_rx = path_rx.clone();
            let result_tx = result_tx.clone();
            thread::Builder::new()
                .name(format!("{}-worker-{id}", env!("CARGO_PKG_NAME")))
                .spawn(move || histogram_worker_loop(id, path_rx, result_tx))
                .with_context(|| format!("spawn worker {id}"))
        })
        .collect()
}
