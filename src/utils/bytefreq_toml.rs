//! Load the `[settings]` table from a `.bytefreq.toml` file (CLI only). Lib callers pass
//! [`HistogramOpts`](crate::HistogramOpts) directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::{OutputFormat, Opts};
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BytefreqToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    root: Option<String>,
    workers: Option<usize>,
    queue_capacity: Option<usize>,
    follow_links: Option<bool>,
    parallel_walk: Option<bool>,
    exclude: Option<Vec<String>>,
    format: Option<OutputFormat>,
    full_range: Option<bool>,
    verbose: Option<bool>,
}

pub(crate) fn parse_bytefreq_toml(s: &str) -> Result<BytefreqToml, toml::de::Error> {
    toml::from_str(s)
}

/// Load an explicitly requested settings file. Missing or malformed is an error.
pub(crate) fn load_config_file(path: &Path) -> Result<BytefreqToml> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_bytefreq_toml(&s).with_context(|| format!("parse config file {}", path.display()))
}

/// Load `.bytefreq.toml` from `dir` if present. `Ok(None)` if missing or unreadable; Err if malformed
/// (the caller logs it and carries on with defaults).
pub(crate) fn load_default_config(dir: &Path) -> Result<Option<BytefreqToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    let Ok(s) = std::fs::read_to_string(&path) else {
        return Ok(None);
    };
    parse_bytefreq_toml(&s)
        .map(Some)
        .with_context(|| format!("ignoring {}", path.display()))
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
pub(crate) fn apply_file_to_opts(file: &BytefreqToml, opts: &mut Opts) {
    let sec = &file.settings;
    if let Some(ref p) = sec.root {
        opts.root = PathBuf::from(p);
    }
    apply_file_opt!(sec, opts, workers => workers);
    apply_file_opt!(sec, opts, queue_capacity => queue_capacity);
    apply_file_opt!(sec, opts, follow_links => follow_links);
    apply_file_opt!(sec, opts, parallel_walk => parallel_walk);
    if let Some(ref v) = sec.exclude {
        opts.exclude = v.clone();
    }
    apply_file_opt!(sec, opts, format => format);
    apply_file_opt!(sec, opts, full_range => full_range);
    apply_file_opt!(sec, opts, verbose => verbose);
}
