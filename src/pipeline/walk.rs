//! Directory walk: turns the tree under the root into paths on the bounded queue.
//! Unreadable subtrees are logged and skipped; only the root is ever fatal, and that is checked before.

use crossbeam_channel::Sender;
use log::warn;
use std::path::PathBuf;

use crate::engine::progress::WalkProgress;
use crate::engine::tools::{is_excluded, should_include_in_walk};

use super::context::PipelineContext;

/// One result from a directory walk: a path with whether it is a directory, or an error with optional path.
pub enum WalkOutcome {
    Ok { path: PathBuf, is_dir: bool },
    Err { msg: String, path: Option<PathBuf> },
}

/// What the walk reports back once it has returned (and dropped its queue sender).
#[derive(Debug, Default)]
pub struct WalkSummary {
    /// Paths pushed onto the queue.
    pub path_count: usize,
    /// Unreadable directories/entries with the error message.
    pub skipped_paths: Vec<(PathBuf, String)>,
}

/// Convert a jwalk result into [`WalkOutcome`].
pub fn to_outcome_jwalk(r: Result<jwalk::DirEntry<((), ())>, jwalk::Error>) -> WalkOutcome {
    match r {
        Ok(entry) => WalkOutcome::Ok {
            is_dir: entry.file_type().is_dir(),
            path: entry.path(),
        },
        Err(err) => WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        },
    }
}

/// Convert a walkdir result into [`WalkOutcome`].
pub fn to_outcome_walkdir(r: Result<walkdir::DirEntry, walkdir::Error>) -> WalkOutcome {
    match r {
        Ok(entry) => WalkOutcome::Ok {
            is_dir: entry.file_type().is_dir(),
            path: entry.into_path(),
        },
        Err(err) => WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        },
    }
}

/// Parallel directory reads on the rayon pool; excluded directories are pruned before descent.
fn jwalk_iter(ctx: &PipelineContext) -> Box<dyn Iterator<Item = WalkOutcome>> {
    use jwalk::Parallelism;
    use std::time::Duration;
    let exclude = ctx.exclude.clone();
    Box::new(
        jwalk::WalkDir::new(&ctx.root)
            .follow_links(ctx.follow_links)
            .skip_hidden(false)
            .parallelism(Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_secs(60),
            })
            .process_read_dir(move |_depth, _path, _state, children| {
                children.retain(|child| match child {
                    Ok(entry) => !is_excluded(&entry.path(), &exclude),
                    Err(_) => true,
                });
            })
            .into_iter()
            .map(to_outcome_jwalk),
    )
}

/// Serial walk. walkdir keeps its own stack of open directories, so depth is not bound by the call stack.
fn walkdir_iter(ctx: &PipelineContext) -> Box<dyn Iterator<Item = WalkOutcome>> {
    use walkdir::WalkDir;
    let root = ctx.root.clone();
    let exclude = ctx.exclude.clone();
    Box::new(
        WalkDir::new(&ctx.root)
            .follow_links(ctx.follow_links)
            .into_iter()
            .filter_entry(move |e| e.path() == root.as_path() || !is_excluded(e.path(), &exclude))
            .map(to_outcome_walkdir),
    )
}

/// Walk `ctx.root` and push every non-directory path onto `path_tx`, blocking while the queue is full.
/// Runs on the caller's thread. `path_tx` is dropped on return, which closes the queue.
pub fn run_walk(path_tx: Sender<PathBuf>, ctx: &PipelineContext, parallel_walk: bool) -> WalkSummary {
    let iter: Box<dyn Iterator<Item = WalkOutcome>> = match parallel_walk {
        true => jwalk_iter(ctx),
        false => walkdir_iter(ctx),
    };
    run_walk_loop(path_tx, ctx, iter)
}

/// Consume `iter` of [`WalkOutcome`]: queue included non-directories, log and record errors.
/// Returns once the iterator is exhausted or every receiver is gone.
pub fn run_walk_loop<I>(path_tx: Sender<PathBuf>, ctx: &PipelineContext, iter: I) -> WalkSummary
where
    I: Iterator<Item = WalkOutcome>,
{
    let mut summary = WalkSummary::default();
    let mut progress = WalkProgress::new(ctx.verbose);
    for outcome in iter {
        match outcome {
            WalkOutcome::Ok { is_dir: true, .. } => {}
            WalkOutcome::Ok { path, is_dir: false } => {
                if !should_include_in_walk(&path, &ctx.root, &ctx.exclude) {
                    continue;
                }
                if path_tx.send(path).is_err() {
                    // All workers gone; nothing left to feed.
                    warn!("path queue closed before the walk finished");
                    break;
                }
                summary.path_count += 1;
                progress.tick();
            }
            WalkOutcome::Err { msg, path } => {
                let path = path.unwrap_or_else(|| ctx.root.clone());
                warn!("cannot read {}: {}", path.display(), msg);
                summary.skipped_paths.push((path, msg));
            }
        }
    }
    progress.finish();
    drop(path_tx);
    summary
}
