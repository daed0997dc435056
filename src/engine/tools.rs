//! Path and filter utilities

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// True if `path` matches any exclude pattern, by file name or by full path.
pub fn is_excluded(path: &Path, exclude_patterns: &[String]) -> bool {
    if exclude_patterns.is_empty() {
        return false;
    }
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };
    let path_str = path.to_str().unwrap_or("");
    exclude_patterns
        .iter()
        .any(|pattern| glob_match(pattern, name) || glob_match(pattern, path_str))
}

/// Returns true if the path should be queued: not the root itself and not excluded.
pub fn should_include_in_walk(path: &Path, root: &Path, exclude_patterns: &[String]) -> bool {
    path != root && !is_excluded(path, exclude_patterns)
}

/// Simple glob pattern matching (supports * and ?)
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    glob_match_chars(&pattern, &text)
}

fn glob_match_chars(pattern: &[char], text: &[char]) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some((&'*', rest)) => {
            // `*` swallows zero or more chars
            (0..=text.len()).any(|skip| glob_match_chars(rest, &text[skip..]))
        }
        Some((&'?', rest)) => !text.is_empty() && glob_match_chars(rest, &text[1..]),
        Some((c, rest)) => text.first() == Some(c) && glob_match_chars(rest, &text[1..]),
    }
}

/// Canonicalize the root and make sure it is a directory we can list.
/// This is the only whole-run failure: nothing has been started when it returns Err.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = path
        .canonicalize()
        .with_context(|| format!("directory {} not found", path.display()))?;
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }
    std::fs::read_dir(&root).with_context(|| format!("cannot list {}", root.display()))?;
    Ok(root)
}
