//! Rendering of the merged histogram: text bar charts or JSON.
//! Pure functions of the final counts; nothing here touches the pipeline.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::histogram::Histogram;
use crate::types::{OutputFormat, ScanResult};
use crate::utils::config::ChartConsts;

/// Chart panels of [`ChartConsts::PANEL_SIZE`] byte values each: 0..=127 by default, 0..=255 with `full_range`.
pub fn chart_ranges(full_range: bool) -> Vec<RangeInclusive<u8>> {
    let last = if full_range {
        u8::MAX as usize
    } else {
        ChartConsts::DEFAULT_LAST_BYTE as usize
    };
    (0..=last)
        .step_by(ChartConsts::PANEL_SIZE)
        .map(|start| {
            let end = (start + ChartConsts::PANEL_SIZE - 1).min(last);
            start as u8..=end as u8
        })
        .collect()
}

/// Printable label for a byte value: the ASCII char itself, or an escape such as `\n` or `\x7f`.
pub fn byte_label(b: u8) -> String {
    std::ascii::escape_default(b).to_string()
}

/// Bar of `width` cells scaled so that `max` fills the whole width. Non-zero counts get at least one cell.
fn bar_cells(count: u64, max: u64, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let cells = (count as u128 * width as u128 / max as u128) as usize;
    cells.clamp(1, width)
}

/// Render one panel: header line, then one row per byte value.
pub fn render_panel<W: Write>(
    out: &mut W,
    histogram: &Histogram,
    range: RangeInclusive<u8>,
    use_color: bool,
) -> Result<()> {
    let title = format!(
        "{} - {} byte value distribution",
        range.start(),
        range.end()
    );
    if use_color {
        writeln!(out, "{}", title.bold())?;
    } else {
        writeln!(out, "{}", title)?;
    }

    let max = histogram.max_in(range.clone());
    for b in range {
        let count = histogram.get(b);
        let cells = bar_cells(count, max, ChartConsts::BAR_WIDTH);
        let bar = "█".repeat(cells);
        let bar = if use_color {
            bar.green().to_string()
        } else {
            bar
        };
        let pad = " ".repeat(ChartConsts::BAR_WIDTH - cells);
        writeln!(out, "{:>3} {:<6} {}{} {}", b, byte_label(b), bar, pad, count)?;
    }
    writeln!(out)?;
    Ok(())
}

/// All chart panels for `histogram`.
pub fn render_chart<W: Write>(
    out: &mut W,
    histogram: &Histogram,
    full_range: bool,
    use_color: bool,
) -> Result<()> {
    for range in chart_ranges(full_range) {
        render_panel(out, histogram, range, use_color)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    total_bytes: u64,
    files_read: usize,
    files_skipped: usize,
    read_errors: usize,
    path_count: usize,
    counts: &'a Histogram,
}

/// JSON object with the run counters and all 256 counts.
pub fn render_json<W: Write>(out: &mut W, result: &ScanResult) -> Result<()> {
    let report = JsonReport {
        root: &result.root,
        total_bytes: result.histogram.total(),
        files_read: result.stats.files_read,
        files_skipped: result.stats.files_skipped,
        read_errors: result.stats.read_errors,
        path_count: result.path_count,
        counts: &result.histogram,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Render `result` in `format`.
pub fn render<W: Write>(
    out: &mut W,
    result: &ScanResult,
    format: OutputFormat,
    full_range: bool,
    use_color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Chart => render_chart(out, &result.histogram, full_range, use_color),
        OutputFormat::Json => render_json(out, result),
    }
}
