//! Game state module - the single owned aggregate behind a session
//!
//! Board, falling piece, preview piece, and session counters live together in
//! [`GameState`]. Every mutating operation checks the session phase first, so
//! moves, drops, and gravity are no-ops unless the game is actively playing.

use log::{debug, info};

use crate::board::Board;
use crate::piece::{try_rotate, Piece};
use crate::rng::PieceGenerator;
use crate::scoring::{drop_interval_ms, drop_points, level_for_lines, line_clear_points};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GamePhase, BASE_DROP_MS, SOFT_DROP_POINTS, START_LEVEL};

/// Emitted each time a piece locks; drained with [`GameState::take_last_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points from the line clear alone (drop points are not included)
    pub points: u32,
    /// Sub-cells that locked above the board and were discarded
    pub discarded_cells: u32,
    /// The promoted piece could not be placed, ending the session
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    generator: PieceGenerator,
    phase: GamePhase,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    /// Time accumulated toward the next gravity step
    drop_counter_ms: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// A fresh, idle game. Nothing falls until [`GameState::start`].
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            generator: PieceGenerator::new(seed),
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
            drop_counter_ms: 0,
            last_event: None,
        }
    }

    /// Reset the board and counters and begin playing with a new active and
    /// next piece. Also used for restart.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = START_LEVEL;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.active = Some(self.generator.create_piece());
        self.next = Some(self.generator.create_piece());
        self.phase = GamePhase::Playing;
        info!("session started (seed {})", self.generator.seed());
    }

    /// Playing ⇄ Paused. Returns false (and does nothing) in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            _ => return false,
        };
        info!("{}", self.phase.as_str());
        true
    }

    fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        info!(
            "game over: score {} lines {} level {}",
            self.score, self.lines, self.level
        );
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn playing(&self) -> bool {
        self.phase.is_playing()
    }

    pub fn paused(&self) -> bool {
        self.phase.is_paused()
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    /// `playing && !paused && !game_over`
    pub fn accepts_input(&self) -> bool {
        self.phase.accepts_input()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions in tests and tools.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    /// Swap in a specific falling piece (tests and tools).
    pub fn replace_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    /// Swap in a specific preview piece (tests and tools).
    pub fn replace_next(&mut self, piece: Piece) {
        self.next = Some(piece);
    }

    /// Would `piece` moved by (dx, dy) hit a wall, the floor, or a settled cell?
    pub fn collision(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        self.board.collides(&piece.shape, piece.x + dx, piece.y + dy)
    }

    /// Shift the active piece horizontally if the destination is free.
    pub fn move_piece(&mut self, dx: i8) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        if self.collision(&active, dx, 0) {
            return false;
        }
        self.active = Some(active.translated(dx, 0));
        true
    }

    /// Rotate the active piece clockwise with horizontal correction.
    ///
    /// On failure the piece keeps its previous shape and position.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let board = &self.board;
        match try_rotate(&active, |shape, x, y| board.collides(shape, x, y)) {
            Some((shape, offset)) => {
                self.active = Some(Piece {
                    shape,
                    x: active.x + offset,
                    ..active
                });
                true
            }
            None => false,
        }
    }

    /// Advance the active piece one row, or lock it if it cannot move.
    ///
    /// Resets the gravity accumulator either way. Returns true if the piece
    /// moved, false if it locked (or the game is not accepting input).
    pub fn soft_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        self.drop_counter_ms = 0;

        if !self.collision(&active, 0, 1) {
            self.active = Some(active.translated(0, 1));
            self.score += SOFT_DROP_POINTS;
            return true;
        }

        self.lock_piece(active);
        false
    }

    /// Slide the active piece down until it rests, scoring per row, then lock
    /// it with one soft drop. Returns the rows descended.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.accepts_input() {
            return 0;
        }
        let Some(mut active) = self.active else {
            return 0;
        };

        let mut cells: u32 = 0;
        while !self.collision(&active, 0, 1) {
            active = active.translated(0, 1);
            cells += 1;
        }
        self.active = Some(active);
        self.score += drop_points(cells, true);

        self.soft_drop();
        cells
    }

    /// Merge `piece` into the board, clear lines, promote the preview piece,
    /// and end the game if the promoted piece has no room.
    ///
    /// Cells locked above the board are simply dropped; top-out is only
    /// detected when the next piece fails to fit.
    fn lock_piece(&mut self, piece: Piece) {
        let discarded = self.board.merge(&piece.shape, piece.x, piece.y);
        let score_before = self.score;
        let lines_cleared = self.clear_lines();
        let points = self.score - score_before;

        let promoted = match self.next.take() {
            Some(next) => next,
            None => self.generator.create_piece(),
        };
        self.active = Some(promoted);
        self.next = Some(self.generator.create_piece());

        let topped_out = self.collision(&promoted, 0, 0);
        debug!(
            "locked {} at ({}, {}): {} lines, {} points, {} cells above board",
            piece.kind.letter(),
            piece.x,
            piece.y,
            lines_cleared,
            points,
            discarded
        );
        if topped_out {
            self.end_game();
        }

        self.last_event = Some(LockEvent {
            lines_cleared,
            points,
            discarded_cells: discarded as u32,
            topped_out,
        });
    }

    /// Remove full rows and apply score, line, level, and speed updates.
    ///
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len();
        if cleared == 0 {
            return 0;
        }

        self.score += line_clear_points(cleared, self.level);
        self.lines += cleared as u32;
        let level = level_for_lines(self.lines);
        if level != self.level {
            info!("level {}", level);
        }
        self.level = level;
        self.drop_interval_ms = drop_interval_ms(level);
        cleared as u32
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Row the active piece would rest on if dropped straight down.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut dy: i8 = 0;
        while !self.collision(&active, 0, dy + 1) {
            dy += 1;
        }
        Some(active.y + dy)
    }

    /// Advance gravity by `elapsed_ms`. Performs one soft drop once the
    /// accumulated time exceeds the drop interval. Returns true if it did.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Apply an action. Returns true if it changed anything.
    ///
    /// Gameplay actions need the Playing phase. `Start` works from the title
    /// screen and after game over; `Restart` works any time.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                if !self.accepts_input() {
                    return false;
                }
                self.soft_drop();
                true
            }
            GameAction::HardDrop => {
                if !self.accepts_input() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Start => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::GameOver) {
                    self.start();
                    true
                } else {
                    false
                }
            }
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.start();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_id_grid(&mut out.board);
        out.active = self.active;
        out.next = self.next;
        out.ghost_y = self.ghost_y();
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

    fn playing(seed: u32) -> GameState {
        let mut state = GameState::new(seed);
        state.start();
        state
    }

    fn fill_row_except(state: &mut GameState, y: i8, gap: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            if Some(x) != gap {
                state.board.set(x, y, Some(PieceKind::Z));
            }
        }
    }

    #[test]
    fn test_new_game_state_is_idle() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.active.is_none());
        assert!(state.next.is_none());
        assert_eq!(state.level, 1);
        assert_eq!(state.drop_interval_ms, 1000);
    }

    #[test]
    fn test_start_spawns_active_and_next() {
        let state = playing(12345);
        assert!(state.accepts_input());
        let active = state.active.unwrap();
        assert_eq!(active, Piece::spawn(active.kind));
        assert!(state.next.is_some());
    }

    #[test]
    fn test_inputs_are_inert_when_idle() {
        let mut state = GameState::new(1);
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert!(!state.tick(5000));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_soft_drop_moves_and_scores() {
        let mut state = playing(7);
        let y = state.active.unwrap().y;
        state.drop_counter_ms = 500;
        assert!(state.soft_drop());
        assert_eq!(state.active.unwrap().y, y + 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.drop_counter_ms, 0);
    }

    #[test]
    fn test_lock_promotes_next_piece() {
        let mut state = playing(7);
        state.replace_active(Piece::spawn(PieceKind::O).translated(0, 18));
        let next = state.next.unwrap();

        assert!(!state.soft_drop());
        assert_eq!(state.active, Some(next));
        assert_eq!(state.board.get(4, 19), Some(Some(PieceKind::O)));
        let event = state.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 0);
        assert!(!event.topped_out);
    }

    #[test]
    fn test_clear_lines_updates_counters() {
        let mut state = playing(1);
        fill_row_except(&mut state, 19, None);
        fill_row_except(&mut state, 18, None);
        assert_eq!(state.clear_lines(), 2);
        assert_eq!(state.score, 300);
        assert_eq!(state.lines, 2);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut state = playing(3);
        let y = state.active.unwrap().y;
        assert!(!state.tick(600));
        assert!(!state.tick(400)); // exactly 1000: not yet
        assert_eq!(state.active.unwrap().y, y);
        assert!(state.tick(1));
        assert_eq!(state.active.unwrap().y, y + 1);
        assert_eq!(state.drop_counter_ms, 0);
    }

    #[test]
    fn test_pause_blocks_everything_but_pause() {
        let mut state = playing(3);
        assert!(state.toggle_pause());
        let before = state.snapshot();
        assert!(!state.apply_action(GameAction::MoveRight));
        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.apply_action(GameAction::Start));
        assert!(!state.tick(10_000));
        assert_eq!(state.snapshot(), before);
        assert!(state.toggle_pause());
        assert!(state.accepts_input());
    }

    #[test]
    fn test_toggle_pause_only_while_playing() {
        let mut state = GameState::new(3);
        assert!(!state.toggle_pause());
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_ghost_rests_on_floor() {
        let mut state = playing(3);
        state.replace_active(Piece::spawn(PieceKind::I));
        assert_eq!(state.ghost_y(), Some(BOARD_HEIGHT as i8 - 1));
    }

    #[test]
    fn test_top_out_is_detected_on_promotion() {
        let mut state = playing(3);
        // Column stack reaching the top under the spawn area.
        for y in 1..BOARD_HEIGHT as i8 {
            for x in 3..7 {
                state.board.set(x, y, Some(PieceKind::J));
            }
        }
        state.replace_next(Piece::spawn(PieceKind::O));
        state.replace_active(Piece::spawn(PieceKind::O).translated(0, -1));

        state.soft_drop();
        assert!(state.game_over());
        assert!(state.take_last_event().unwrap().topped_out);
        assert!(!state.tick(10_000));
    }
}
