//! Shared types for the pentomino puzzle.
//!
//! This crate contains pure data types and tuning constants with no external
//! dependencies. Everything here is `Copy`-friendly vocabulary used by the
//! engine, the input layer, and the terminal view alike.
//!
//! # Board & timing
//!
//! The playfield is a fixed 10×6 grid (60 cells — exactly twelve
//! pentominoes). A game starts with a 240 second countdown. Unplaced pieces
//! vanish on their own: after 5–10 s if never touched, after 20–30 s once
//! engaged, the window restarting on every re-selection.
//!
//! # Examples
//!
//! ```
//! use tui_pentomino_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let kind = PieceKind::W;
//! assert_eq!(kind.as_str(), "W");
//! assert_eq!(Rotation::R270.rotate_cw(), Rotation::R0);
//! assert_eq!(BOARD_WIDTH as u32 * BOARD_HEIGHT as u32, 60);
//! ```

/// Board dimensions in cells.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 6;

/// Countdown at the start of a game, in seconds.
pub const INITIAL_COUNTDOWN_SECS: u32 = 240;

/// Vanish window for a piece that was never touched (inclusive, seconds).
pub const IDLE_VANISH_SECS: (u32, u32) = (5, 10);
/// Vanish window once a piece has been selected at least once (inclusive, seconds).
pub const ENGAGED_VANISH_SECS: (u32, u32) = (20, 30);

/// Duration of the cosmetic fade shown when an engaged piece vanishes.
pub const VANISH_FADE_MS: u64 = 150;

/// Frontend cadences: the UI tick drives input repeats and redraws, the
/// engine clock advances once per second.
pub const UI_TICK_MS: u32 = 50;
pub const ENGINE_TICK_MS: u64 = 1000;

/// Hold-to-repeat timing for cursor movement (milliseconds).
pub const DEFAULT_DAS_MS: u32 = 150;
pub const DEFAULT_ARR_MS: u32 = 50;

/// Identity of a piece within one session. Monotonic, never reused.
pub type PieceId = u32;

/// Offset of a single cell relative to a shape's anchor.
pub type CellOffset = (i8, i8);

/// A pentomino occupies exactly five cells.
pub type PieceCells = [CellOffset; 5];

/// The twelve canonical pentomino shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    F,
    I,
    L,
    P,
    N,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl PieceKind {
    /// The full catalog, in canonical order.
    pub const ALL: [PieceKind; 12] = [
        PieceKind::F,
        PieceKind::I,
        PieceKind::L,
        PieceKind::P,
        PieceKind::N,
        PieceKind::T,
        PieceKind::U,
        PieceKind::V,
        PieceKind::W,
        PieceKind::X,
        PieceKind::Y,
        PieceKind::Z,
    ];

    /// Parse a piece kind from its letter (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "f" => Some(PieceKind::F),
            "i" => Some(PieceKind::I),
            "l" => Some(PieceKind::L),
            "p" => Some(PieceKind::P),
            "n" => Some(PieceKind::N),
            "t" => Some(PieceKind::T),
            "u" => Some(PieceKind::U),
            "v" => Some(PieceKind::V),
            "w" => Some(PieceKind::W),
            "x" => Some(PieceKind::X),
            "y" => Some(PieceKind::Y),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// The shape's letter.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::F => "F",
            PieceKind::I => "I",
            PieceKind::L => "L",
            PieceKind::P => "P",
            PieceKind::N => "N",
            PieceKind::T => "T",
            PieceKind::U => "U",
            PieceKind::V => "V",
            PieceKind::W => "W",
            PieceKind::X => "X",
            PieceKind::Y => "Y",
            PieceKind::Z => "Z",
        }
    }
}

/// Quarter-turn rotation states. `R0` is the spawn orientation; steps are
/// clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Number of clockwise quarter turns from the spawn orientation.
    pub fn index(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn rotate_ccw(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Step in either direction; clockwise adds one quarter turn,
    /// counter-clockwise adds three.
    pub fn turned(self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }
}

/// Semantic commands the engine accepts from the input layer.
///
/// Every gameplay command is a no-op once the game is over; `NewGame` is
/// always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Focus a piece; for an unplaced piece this counts as engagement and
    /// restarts its vanish window.
    Select { piece: PieceId },
    /// Quarter-turn an unplaced piece.
    Rotate { piece: PieceId, clockwise: bool },
    /// Try to lock an unplaced piece onto the board at an anchor cell.
    Place { piece: PieceId, x: i8, y: i8 },
    /// Remove a locked piece from the board.
    Delete { piece: PieceId },
    /// Reset the session and spawn the first piece.
    NewGame,
}

/// Frontend-level actions produced by the key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    RotateCw,
    RotateCcw,
    Place,
    Delete,
    Restart,
}

impl InputAction {
    /// Cursor movement repeats while the key is held; everything else fires
    /// once per press.
    pub fn repeats(self) -> bool {
        matches!(
            self,
            InputAction::CursorLeft
                | InputAction::CursorRight
                | InputAction::CursorUp
                | InputAction::CursorDown
        )
    }
}

/// Final result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
}

/// State transitions the engine reports to observers (consumed by the
/// frontend via `Session::take_events`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new pool piece appeared.
    Spawned { piece: PieceId },
    /// A piece was locked onto the board.
    Placed { piece: PieceId },
    /// A locked piece was removed from the board.
    Deleted { piece: PieceId },
    /// An unplaced piece timed out. `fade` is true when the piece had been
    /// engaged at least once, asking the presentation for a brief fade
    /// instead of an immediate disappearance.
    Vanished {
        piece: PieceId,
        kind: PieceKind,
        rotation: Rotation,
        hue: u16,
        fade: bool,
    },
    /// The session ended.
    Ended { outcome: GameOutcome },
}
