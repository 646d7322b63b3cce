//! Command-line configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::LevelFilter;

use crate::types::TICK_MS;

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Args {
    #[arg(long, value_name = "N", help = "Seed for the piece generator (default: derived from the clock)")]
    pub seed: Option<u32>,

    #[arg(long, value_name = "FILE", help = "Write logs to FILE (logging is off otherwise)", value_hint = clap::ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value = "info", help = "Log level: off, error, warn, info, debug, trace")]
    pub log_level: LevelFilter,

    #[arg(long, help = "Print the session summary as JSON on exit")]
    pub json: bool,

    #[arg(
        long,
        value_name = "MS",
        default_value_t = TICK_MS,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Host frame period in milliseconds"
    )]
    pub frame_ms: u32,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: u32,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub json: bool,
    pub frame_ms: u32,
}

impl Config {
    pub fn from_env_args() -> Self {
        Args::parse().into()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed.unwrap_or_else(clock_seed),
            log_file: args.log_file,
            log_level: args.log_level,
            json: args.json,
            frame_ms: args.frame_ms,
        }
    }
}

/// Low 32 bits of the current time in milliseconds.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
