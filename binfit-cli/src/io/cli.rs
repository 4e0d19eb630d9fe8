use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Selects a combination of bin sizes covering a load, with as little overcapacity and as few bins as possible
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The load to be covered
    #[arg(allow_negative_numbers = true)]
    pub load: i64,
    /// Available bin sizes, each usable any number of times
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub bins: Vec<i64>,
    #[arg(
        short = 't',
        long,
        value_name = "[length, capacity, combo, all]",
        default_value = "all"
    )]
    pub solver_type: String,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Writes the solutions as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
}
