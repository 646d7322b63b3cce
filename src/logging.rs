//! File logging.
//!
//! The terminal is the game screen, so log lines never go to stdout or
//! stderr. Without `--log-file` no logger is installed and the `log` macros
//! in the library crates compile to cheap no-ops.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Route `log` output to `path` (appending). `RUST_LOG` overrides `level`.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::new()
        .filter_level(level)
        .parse_env(Env::default())
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}
