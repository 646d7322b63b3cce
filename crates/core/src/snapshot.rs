use crate::piece::Piece;
use crate::types::{GamePhase, BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL};

/// Read-only copy of everything a renderer or display needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Settled cells as ids (0 = empty, 1-7 = kind)
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    /// Row the active piece would come to rest on if dropped straight down.
    pub ghost_y: Option<i8>,
    pub phase: GamePhase,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.next = None;
        self.ghost_y = None;
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.lines = 0;
        self.level = START_LEVEL;
        self.drop_interval_ms = BASE_DROP_MS;
    }

    pub fn playable(&self) -> bool {
        self.phase.accepts_input()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            ghost_y: None,
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
        }
    }
}
