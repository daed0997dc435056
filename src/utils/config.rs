//! Application configuration constants.
//! Tuning and thresholds in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Settings file looked up in the current directory when `--config` is not given.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Pipeline ----

/// Defaults for the two pipeline knobs and the root.
pub struct PipelineDefaults;

impl PipelineDefaults {
    /// Directory walked when none is given.
    pub const ROOT: &'static str = "data";
    /// Worker pool size.
    pub const WORKERS: usize = 4;
    /// Bounded path queue capacity. Small on purpose: the walk should not run far ahead of the readers.
    pub const QUEUE_CAPACITY: usize = 4;
}

// ---- Reading ----

/// File reading thresholds and buffer sizes.
pub struct ReadConsts;

impl ReadConsts {
    /// File size at or above which bytes are counted through a memory map. 100 MB.
    pub const MMAP_THRESHOLD: u64 = 100 * 1024 * 1024;
    /// Chunk size for reading files below the mmap threshold. 64 KB.
    pub const READ_CHUNK_SIZE: usize = 64 * 1024;
}

// ---- Rendering ----

/// Chart layout.
pub struct ChartConsts;

impl ChartConsts {
    /// Byte values per chart panel.
    pub const PANEL_SIZE: usize = 64;
    /// Highest byte value charted unless full range is requested.
    pub const DEFAULT_LAST_BYTE: u8 = 127;
    /// Width of the longest bar, in cells.
    pub const BAR_WIDTH: usize = 48;
}
