//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds all of the rules and none of the I/O: no terminal, no
//! clock, no input devices. Time enters only as the `elapsed_ms` argument to
//! [`GameState::tick`], which keeps every rule reproducible from a seed.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision, merge, and line clearing
//! - [`shapes`]: immutable shape catalog and clockwise matrix rotation
//! - [`piece`]: the falling piece and rotation with horizontal correction
//! - [`rng`]: seeded uniform piece generator
//! - [`scoring`]: line-clear points, level progression, gravity speed
//! - [`game_state`]: the session aggregate tying it all together
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // hard drop awards points
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, ClearedRows};
pub use game_state::{GameState, LockEvent};
pub use piece::{try_rotate, Piece};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{drop_interval_ms, drop_points, level_for_lines, line_clear_points};
pub use shapes::{template, Shape};
pub use snapshot::GameSnapshot;
