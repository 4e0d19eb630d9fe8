use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use binfit::SolverConfig;
use log::{LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_config(path: &Path) -> Result<SolverConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, output)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!(
        "[MAIN] solutions written to {:?}",
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    LazyLock::force(&EPOCH);
    fern::Dispatch::new()
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!("[{}] [{:0>2}:{:0>2}:{:0>2}]", record.level(), hours, min, sec);

            out.finish(format_args!("{prefix:<20}{message}"))
        })
        .level(level_filter)
        // stdout is reserved for the solutions
        .chain(std::io::stderr())
        .apply()
        .context("could not initialize logger")?;
    info!("[MAIN] start time: {}", jiff::Timestamp::now());
    Ok(())
}
