//! Game loop - drives a [`blockfall_core::GameState`] from host frames.
//!
//! - [`frame_loop`]: cancellable per-frame task that turns wall-clock deltas
//!   into gravity ticks
//! - [`game`]: session controller keeping the loop in step with start, pause,
//!   restart, and game over
//!
//! The host supplies timestamps; nothing here reads a clock, so a test can
//! drive a whole session with made-up times.

pub mod frame_loop;
pub mod game;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use frame_loop::FrameLoop;
pub use game::Game;
