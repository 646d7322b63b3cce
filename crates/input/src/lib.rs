//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events and mouse gestures into
//! [`crate::types::GameAction`]s. Nothing here knows about game rules; whether
//! an action is accepted is decided by the engine.

pub mod map;
pub mod touch;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_actionable, should_quit};
pub use touch::{classify_gesture, GestureRecognizer, TouchPoint};
