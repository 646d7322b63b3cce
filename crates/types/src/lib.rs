//! Shared types and constants for the game.
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! engine, the input mapping, and the terminal renderer alike.
//!
//! # Board
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - Rows above the board (negative y) exist only for pieces that have not yet
//!   fully entered view.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame period (~60 Hz) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_INTERVAL_STEP_MS` | 100 | Gravity speed-up per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Gravity floor |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
//! assert_eq!(PieceKind::Z.id(), 7);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of distinct piece kinds in the catalog
pub const PIECE_KIND_COUNT: usize = 7;

/// Host frame period in milliseconds (16ms ≈ 60 Hz)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level gained
pub const DROP_INTERVAL_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a fresh session
pub const START_LEVEL: u32 = 1;

/// Base points for clearing 0-4 lines with one lock, multiplied by the level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points awarded for a successful soft drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points awarded per cell descended during a hard drop
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Minimum travel (device-independent pixels) for a touch to count as a swipe
pub const MIN_SWIPE_DISTANCE: f32 = 30.0;

/// The seven piece kinds.
///
/// The declaration order is the catalog order: `I` has id 1 and `Z` has id 7.
/// The id doubles as the colour index when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Catalog id in `1..=7`.
    pub fn id(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based position in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Inverse of [`PieceKind::id`]. Returns `None` for 0 and anything above 7.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(4), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[id as usize - 1]),
            _ => None,
        }
    }

    /// Single uppercase letter, for panels and logs
    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }
}

/// A cell on the board or inside a shape matrix.
///
/// - `None`: empty (id 0)
/// - `Some(kind)`: filled with a settled or falling piece of that kind
pub type Cell = Option<PieceKind>;

/// Numeric id of a cell (0 for empty).
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::id)
}

/// Requests that can be made of the game, from keys, gestures, or buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise (with horizontal correction)
    Rotate,
    /// Drop piece to its resting row and lock it
    HardDrop,
    /// Begin a session from the title screen or after game over
    Start,
    /// Toggle pause while a session is running
    Pause,
    /// Throw away the current session and begin a new one
    Restart,
}

impl GameAction {
    /// Parse an action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "start" => Some(GameAction::Start),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether this action moves the falling piece (as opposed to controlling the session).
    pub fn is_gameplay(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::SoftDrop
                | GameAction::Rotate
                | GameAction::HardDrop
        )
    }
}

/// Session lifecycle.
///
/// ```text
/// Idle --start--> Playing <--pause--> Paused
///                    |
///                 top-out
///                    v
///                 GameOver --start/restart--> Playing
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    /// A session is running (possibly paused).
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        *self == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        *self == GamePhase::GameOver
    }

    /// Gameplay input and gravity are live only in this phase.
    pub fn accepts_input(&self) -> bool {
        *self == GamePhase::Playing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}
