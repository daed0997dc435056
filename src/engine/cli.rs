//! CLI command handler: build options, run the pipeline, render the histogram.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::engine::arg_parser::Cli;
use crate::engine::render::render;
use crate::pipeline::collect_histogram;
use crate::types::Opts;
use crate::utils::bytefreq_toml::{
    BytefreqToml, apply_file_to_opts, load_config_file, load_default_config,
};
use crate::utils::setup_logging;

/// Overwrite opts field from CLI when given.
macro_rules! apply_cli_opt {
    ($cli:expr, $opts:expr, $cli_field:ident => $opts_field:ident) => {
        if let Some(v) = $cli.$cli_field.clone() {
            $opts.$opts_field = v;
        }
    };
}

/// Settings file for this run: `--config` (must load) or `.bytefreq.toml` in `cwd` (optional).
/// A malformed implicit file is handed back as a warning instead of failing the run.
pub(crate) fn load_settings(
    cli: &Cli,
    cwd: &Path,
) -> Result<(Option<BytefreqToml>, Option<anyhow::Error>)> {
    match &cli.config {
        Some(path) => Ok((Some(load_config_file(path)?), None)),
        None => match load_default_config(cwd) {
            Ok(file) => Ok((file, None)),
            Err(e) => Ok((None, Some(e))),
        },
    }
}

/// Defaults, then settings file, then CLI.
pub(crate) fn build_opts(cli: &Cli, file: Option<&BytefreqToml>) -> Result<Opts> {
    let mut opts = Opts::default();
    if let Some(file) = file {
        apply_file_to_opts(file, &mut opts);
    }

    apply_cli_opt!(cli, opts, dir => root);
    apply_cli_opt!(cli, opts, workers => workers);
    apply_cli_opt!(cli, opts, queue_capacity => queue_capacity);
    apply_cli_opt!(cli, opts, follow_links => follow_links);
    apply_cli_opt!(cli, opts, parallel_walk => parallel_walk);
    if !cli.exclude.is_empty() {
        opts.exclude = cli.exclude.clone();
    }
    apply_cli_opt!(cli, opts, format => format);
    apply_cli_opt!(cli, opts, full_range => full_range);
    apply_cli_opt!(cli, opts, verbose => verbose);
    if cli.output.is_some() {
        opts.output = cli.output.clone();
    }

    opts.validate()?;
    Ok(opts)
}

/// Run the histogram pipeline and hand the result to the renderer.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("read current directory")?;
    let (file, file_warning) = load_settings(cli, &cwd)?;
    let opts = build_opts(cli, file.as_ref())?;
    setup_logging(opts.verbose);
    if let Some(e) = file_warning {
        warn!("{:#}", e);
    }

    let config_str = format!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    debug!("{}", config_str);

    let result = collect_histogram(&opts)?;

    match &opts.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create output {}", path.display()))?;
            let mut out = BufWriter::new(file);
            render(&mut out, &result, opts.format, opts.full_range, false)?;
            out.flush()
                .with_context(|| format!("write output {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let use_color = stdout.is_terminal();
            let mut out = stdout.lock();
            render(&mut out, &result, opts.format, opts.full_range, use_color)?;
            out.flush()?;
        }
    }
    Ok(())
}
