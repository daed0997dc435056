//! Bytefreq CLI: histogram byte values under a directory and chart the result.

use anyhow::Result;
use bytefreq::engine::arg_parser::Cli;
use bytefreq::engine::handle_run;
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
