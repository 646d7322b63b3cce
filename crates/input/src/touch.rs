//! Tap and swipe recognition.
//!
//! A gesture is a start point and an end point:
//! - both deltas under the minimum distance: tap, which rotates
//! - mostly horizontal beyond the minimum: move one column that way
//! - mostly vertical and downward beyond the minimum: hard drop
//!
//! Anything else (a short diagonal, an upward swipe) does nothing.
//!
//! Terminals have no touch events, so mouse press/release stand in for touch
//! start/end, with cell coordinates scaled to nominal pixels.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{GameAction, MIN_SWIPE_DISTANCE};

/// Nominal pixel width of one terminal cell.
pub const CELL_PX_WIDTH: f32 = 8.0;

/// Nominal pixel height of one terminal cell.
pub const CELL_PX_HEIGHT: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Centre of terminal cell (column, row) in nominal pixels.
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self {
            x: (column as f32 + 0.5) * CELL_PX_WIDTH,
            y: (row as f32 + 0.5) * CELL_PX_HEIGHT,
        }
    }
}

/// Classify a completed gesture.
pub fn classify_gesture(start: TouchPoint, end: TouchPoint, min_distance: f32) -> Option<GameAction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() < min_distance && dy.abs() < min_distance {
        return Some(GameAction::Rotate);
    }

    if dx.abs() > dy.abs() {
        if dx > min_distance {
            Some(GameAction::MoveRight)
        } else if dx < -min_distance {
            Some(GameAction::MoveLeft)
        } else {
            None
        }
    } else if dy > min_distance {
        Some(GameAction::HardDrop)
    } else {
        None
    }
}

/// Tracks one gesture at a time.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    start: Option<TouchPoint>,
    min_distance: f32,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::with_min_distance(MIN_SWIPE_DISTANCE)
    }

    pub fn with_min_distance(min_distance: f32) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    pub fn touch_start(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    /// Finish the gesture begun by the last `touch_start`.
    ///
    /// An end without a start is ignored.
    pub fn touch_end(&mut self, point: TouchPoint) -> Option<GameAction> {
        let start = self.start.take()?;
        classify_gesture(start, point, self.min_distance)
    }

    /// Forget a gesture in progress (e.g. when input is not being accepted).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Feed a terminal mouse event; left press starts, left release ends.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<GameAction> {
        let point = TouchPoint::from_cell(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.touch_start(point);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.touch_end(point),
            _ => None,
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
