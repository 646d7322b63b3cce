//! Terminal rendering for the game.
//!
//! Renders a [`core::GameSnapshot`] into a simple framebuffer that is then
//! flushed to the terminal with crossterm. No widget library, no layout
//! engine: each board cell maps to a fixed block of terminal characters
//! (2x1, or 4x2 when the terminal is large).
//!
//! - [`fb`]: styled character framebuffer
//! - [`palette`]: piece colours and board background
//! - [`game_view`]: pure snapshot -> framebuffer projection
//! - [`renderer`]: terminal setup/teardown and diff flushing
//! - [`render_throttle`]: redraw gating while the game is static

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod render_throttle;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use render_throttle::{RenderThrottle, STATIC_REDRAW_MS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
