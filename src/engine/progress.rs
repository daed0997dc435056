//! Progress counter for the walk (verbose mode only).

use kdam::{Animation, Bar, BarExt};

/// Create a counter for unknown total (shows count without percentage)
pub fn create_counter(desc: &'static str) -> Bar {
    kdam::tqdm!(
        total = 0,
        desc = desc,
        animation = Animation::Classic,
        position = 0,
        unit = " files"
    )
}

/// Walk progress, owned by the walking thread. A no-op when not verbose.
pub struct WalkProgress {
    bar: Option<Bar>,
    pending: usize,
}

impl WalkProgress {
    /// Paths between bar refreshes.
    const BATCH: usize = 100;

    pub fn new(verbose: bool) -> Self {
        Self {
            bar: verbose.then(|| create_counter("Queueing")),
            pending: 0,
        }
    }

    /// Record one queued path; the bar is refreshed every [`Self::BATCH`] paths.
    pub fn tick(&mut self) {
        let Some(bar) = self.bar.as_mut() else {
            return;
        };
        self.pending += 1;
        if self.pending >= Self::BATCH {
            let _ = bar.update(self.pending);
            self.pending = 0;
        }
    }

    /// Flush the remainder and end the bar line.
    pub fn finish(mut self) {
        if let Some(bar) = self.bar.as_mut() {
            if self.pending > 0 {
                let _ = bar.update(self.pending);
            }
            let _ = bar.refresh();
            eprintln!();
        }
    }
}
