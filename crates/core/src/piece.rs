//! Falling piece and rotation with horizontal wall-kick.
//!
//! The kick is not a table lookup. After a clockwise rotation, horizontal
//! offsets are probed in the order `0, +1, -2, +3, -4, ...` and the first one
//! that fits wins. Probing gives up once the offset magnitude exceeds the
//! rotated shape's width, in which case the rotation is abandoned.

use crate::shapes::{template, Shape};
use crate::types::{PieceKind, BOARD_WIDTH};

/// The falling piece: its kind, its own (possibly rotated) matrix, and the
/// board position of the matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece of `kind`, horizontally centred on the top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = template(kind);
        Self {
            kind,
            shape,
            x: spawn_x(shape.width()),
            y: 0,
        }
    }

    /// Same piece moved by (dx, dy).
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// `floor(COLS / 2) - floor(width / 2)`
pub fn spawn_x(width: u8) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (width / 2) as i8
}

/// Next horizontal probe after `offset`: 0 → 1 → -2 → 3 → -4 → ...
pub fn next_kick_offset(offset: i8) -> i8 {
    if offset > 0 {
        -(offset + 1)
    } else {
        -offset + 1
    }
}

/// Rotate `piece` clockwise, correcting horizontally if the result collides.
///
/// `collides(shape, x, y)` reports whether `shape` placed at (x, y) overlaps a
/// wall, the floor, or a settled cell. Returns the rotated shape and the
/// horizontal offset to apply, or `None` if no probe within range fits.
pub fn try_rotate(
    piece: &Piece,
    collides: impl Fn(&Shape, i8, i8) -> bool,
) -> Option<(Shape, i8)> {
    let rotated = piece.shape.rotate_cw();
    let limit = rotated.width() as i8;

    let mut offset: i8 = 0;
    while collides(&rotated, piece.x + offset, piece.y) {
        offset = next_kick_offset(offset);
        if offset.abs() > limit {
            return None;
        }
    }

    Some((rotated, offset))
}
