//! Shared helpers for parallel processing.

use log::debug;

pub fn parallel_walk_handler(parallel_walk: bool, workers: usize, queue_capacity: usize) {
    if parallel_walk {
        debug!("Walking in parallel");
    } else {
        debug!("Walking serially");
    }
    debug!("Reading with {workers} workers, queue capacity {queue_capacity}");
}
