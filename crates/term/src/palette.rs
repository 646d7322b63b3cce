//! Colours shared by the board, the preview, and the panel.

use crate::fb::Rgb;
use crate::types::PieceKind;

/// Piece colours indexed by catalog id - 1.
pub const PIECE_COLORS: [Rgb; 7] = [
    Rgb::from_hex(0xFF0D72), // I
    Rgb::from_hex(0x0DC2FF), // J
    Rgb::from_hex(0x0DFF72), // L
    Rgb::from_hex(0xF538FF), // O
    Rgb::from_hex(0xFF8E0D), // S
    Rgb::from_hex(0xFFE138), // T
    Rgb::from_hex(0x3877FF), // Z
];

pub const BOARD_BG: Rgb = Rgb::from_hex(0x1A1A2E);
pub const GRID_DOT: Rgb = Rgb::new(60, 60, 82);
pub const BORDER: Rgb = Rgb::new(200, 200, 200);
pub const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
pub const TEXT: Rgb = Rgb::new(220, 220, 220);
pub const PREVIEW_BG: Rgb = Rgb::new(255, 255, 255);
const WHITE: Rgb = Rgb::new(255, 255, 255);

pub fn piece_color(kind: PieceKind) -> Rgb {
    PIECE_COLORS[kind.index()]
}

/// Lighter band drawn along the top edge of each block.
pub fn shine_color(kind: PieceKind) -> Rgb {
    piece_color(kind).mix(WHITE, 77)
}

/// Darkened edge used around each block.
pub fn edge_color(kind: PieceKind) -> Rgb {
    piece_color(kind).mix(Rgb::new(0, 0, 0), 77)
}
