//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests, and the benches can use `blockfall::{core, engine, ...}`.
//! The binary-only pieces (CLI config, file logging, exit summary) live here
//! too.

pub mod config;
pub mod logging;
pub mod summary;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::{Args, Config};
pub use summary::SessionSummary;
