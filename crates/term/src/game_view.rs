//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette;
use crate::types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Preview box interior, in board cells.
const PREVIEW_CELLS: u16 = 4;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where things land for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board frame (border included).
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Left edge of the side panel.
    pub panel_x: u16,
}

impl Layout {
    /// Terminal position of the top-left character of board cell (x, y).
    pub fn cell_origin(&self, view: &GameView, x: u16, y: u16) -> (u16, u16) {
        (
            self.frame_x + 1 + x * view.cell_w,
            self.frame_y + 1 + y * view.cell_h,
        )
    }
}

/// Terminal renderer for the board and its side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Pick the largest cell size whose board and panel fit the viewport.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let large = Self::new(4, 2);
        if large.fits(viewport) {
            large
        } else {
            Self::default()
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn cell_h(&self) -> u16 {
        self.cell_h
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    fn preview_size(&self) -> (u16, u16) {
        (
            PREVIEW_CELLS * self.cell_w + 2,
            PREVIEW_CELLS * self.cell_h + 2,
        )
    }

    fn fits(&self, viewport: Viewport) -> bool {
        let (frame_w, frame_h) = self.frame_size();
        let (preview_w, _) = self.preview_size();
        frame_w + 2 + preview_w <= viewport.width && frame_h <= viewport.height
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let (frame_w, frame_h) = self.frame_size();
        let (preview_w, _) = self.preview_size();
        let total_w = frame_w + 2 + preview_w;
        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x: frame_x + frame_w + 2,
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(screen_style().into_cell(' '));

        let layout = self.layout(viewport);
        let border = CellStyle::new(palette::BORDER, palette::SCREEN_BG);

        draw_border(fb, layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h, border);

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let (px, py) = layout.cell_origin(self, x, y);
                match PieceKind::from_id(snap.board[y as usize][x as usize]) {
                    Some(kind) => self.draw_block(fb, px, py, kind),
                    None => self.draw_empty(fb, px, py),
                }
            }
        }

        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            if snap.phase != GamePhase::Paused && ghost_y != active.y {
                self.draw_piece(fb, &layout, &active.translated(0, ghost_y - active.y), true);
            }
        }
        if let Some(active) = snap.active {
            self.draw_piece(fb, &layout, &active, false);
        }

        self.draw_side_panel(fb, snap, &layout, viewport);
        self.draw_overlay(fb, snap, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, layout: &Layout, piece: &Piece, ghost: bool) {
        for (dx, dy, kind) in piece.shape.occupied() {
            let x = piece.x + dx;
            let y = piece.y + dy;
            if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
                continue;
            }
            let (px, py) = layout.cell_origin(self, x as u16, y as u16);
            if ghost {
                self.draw_outline(fb, px, py, palette::piece_color(kind), palette::BOARD_BG);
            } else {
                self.draw_block(fb, px, py, kind);
            }
        }
    }

    /// Filled block; the top row carries a lighter band.
    fn draw_block(&self, fb: &mut FrameBuffer, px: u16, py: u16, kind: PieceKind) {
        let base = palette::piece_color(kind);
        let shine = CellStyle::new(palette::shine_color(kind), base);
        let body = CellStyle::new(base, base);
        fb.fill_rect(px, py, self.cell_w, 1, '▀', shine);
        if self.cell_h > 1 {
            fb.fill_rect(px, py + 1, self.cell_w, self.cell_h - 1, '█', body);
        }
        if self.cell_w > 2 {
            // Darker right edge separates neighbouring blocks of one colour.
            let edge = CellStyle::new(palette::edge_color(kind), base);
            for dy in 0..self.cell_h {
                fb.put_char(px + self.cell_w - 1, py + dy, '▕', edge);
            }
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let bg = CellStyle::new(palette::GRID_DOT, palette::BOARD_BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', bg);
        fb.put_char(px, py, '·', bg);
    }

    /// Outline only; the board shows through the middle.
    fn draw_outline(&self, fb: &mut FrameBuffer, px: u16, py: u16, color: Rgb, bg: Rgb) {
        let style = CellStyle::new(color, bg);
        let (w, h) = (self.cell_w, self.cell_h);
        fb.fill_rect(px, py, w, h, ' ', style);
        if h == 1 {
            if w == 1 {
                fb.put_char(px, py, '□', style);
            } else {
                fb.put_char(px, py, '[', style);
                fb.put_char(px + w - 1, py, ']', style);
            }
            return;
        }
        draw_border(fb, px, py, w, h, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout, viewport: Viewport) {
        let panel_x = layout.panel_x;
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle::new(palette::TEXT, palette::SCREEN_BG).bold();
        let value = CellStyle::new(palette::TEXT, palette::SCREEN_BG);

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;

        let (preview_w, preview_h) = self.preview_size();
        let box_style = CellStyle::new(palette::BORDER, palette::PREVIEW_BG);
        fb.fill_rect(panel_x, y, preview_w, preview_h, ' ', box_style);
        draw_border(fb, panel_x, y, preview_w, preview_h, box_style);
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x + 1, y + 1, &next);
        }
        y += preview_h + 1;

        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        let hint = CellStyle::new(palette::TEXT, palette::SCREEN_BG).dim();
        for line in ["ENTER start", "P pause", "R restart", "Q quit"] {
            if y >= layout.frame_y + layout.frame_h {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    /// The next piece, centred inside the preview interior at (x0, y0).
    fn draw_preview(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, next: &Piece) {
        let shape = &next.shape;
        let off_x = (PREVIEW_CELLS.saturating_sub(shape.width() as u16) * self.cell_w) / 2;
        let off_y = (PREVIEW_CELLS.saturating_sub(shape.height() as u16) * self.cell_h) / 2;
        for (dx, dy, kind) in shape.occupied() {
            let px = x0 + off_x + dx as u16 * self.cell_w;
            let py = y0 + off_y + dy as u16 * self.cell_h;
            self.draw_block(fb, px, py, kind);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), palette::SCREEN_BG).bold();
        let mid_y = layout.frame_y + layout.frame_h / 2;
        match snap.phase {
            GamePhase::Idle => {
                centered_str(fb, layout, mid_y.saturating_sub(1), "BLOCKFALL", style);
                centered_str(fb, layout, mid_y + 1, "Press ENTER to start", style);
            }
            GamePhase::Paused => {
                centered_str(fb, layout, mid_y, "PAUSED", style);
            }
            GamePhase::GameOver => {
                centered_str(fb, layout, mid_y.saturating_sub(1), "GAME OVER", style);
                let score_w = "SCORE ".len() as u16 + digit_count(snap.score);
                let x = layout.frame_x + layout.frame_w.saturating_sub(score_w) / 2;
                let x = fb.put_str(x, mid_y, "SCORE ", style);
                fb.put_u32(x, mid_y, snap.score, style);
                centered_str(fb, layout, mid_y + 1, "Press R to restart", style);
            }
            GamePhase::Playing => {}
        }
    }
}

fn screen_style() -> CellStyle {
    CellStyle::new(palette::TEXT, palette::SCREEN_BG)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn centered_str(fb: &mut FrameBuffer, layout: &Layout, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn large_cells_need_room() {
        assert_eq!(GameView::for_viewport(Viewport::new(80, 24)), GameView::new(2, 1));
        assert_eq!(GameView::for_viewport(Viewport::new(120, 50)), GameView::new(4, 2));
    }
}
