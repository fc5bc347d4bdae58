//! Core types module - shared data structures and constants
//!
//! Pure data with no external dependencies, usable by the core rules, the
//! loop driver, the terminal renderer and the input mapping alike.
//!
//! # Playfield
//!
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Spawn anchor**: row 0, column `WIDTH / 2 - 2` (3)
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards, so gravity adds 1
//! to every row.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed loop interval |
//! | `DEFAULT_SPEED` | 20 | Loop iterations per gravity step |
//! | `CLEAR_STAGE_MS` | 50 | Pause after each line-clear animation stage |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{PieceKind, HEIGHT, WIDTH};
//!
//! assert_eq!(PieceKind::ALL[1], PieceKind::O);
//! assert_eq!(PieceKind::O.as_str(), "o");
//! assert_eq!((HEIGHT, WIDTH), (20, 10));
//! ```

/// Grid height in rows
pub const HEIGHT: usize = 20;

/// Grid width in columns
pub const WIDTH: usize = 10;

/// Column at which every template's offsets are anchored
pub const SPAWN_COL: i8 = (WIDTH / 2) as i8 - 2;

/// Row at which every template's offsets are anchored
pub const SPAWN_ROW: i8 = 0;

/// Fixed loop interval in milliseconds
pub const TICK_MS: u64 = 50;

/// Loop iterations between two gravity steps
pub const DEFAULT_SPEED: u32 = 20;

/// Pause after each line-clear animation stage, in milliseconds
pub const CLEAR_STAGE_MS: u64 = 50;

/// Line clear scoring table, indexed by lines cleared in one sweep
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Transient line-clear marker, only ever seen by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClearStage {
    One,
    Two,
    Three,
}

impl ClearStage {
    /// Stages in the order they are shown
    pub const ALL: [ClearStage; 3] = [ClearStage::One, ClearStage::Two, ClearStage::Three];

    pub fn index(self) -> u8 {
        match self {
            ClearStage::One => 1,
            ClearStage::Two => 2,
            ClearStage::Three => 3,
        }
    }
}

/// A single grid cell
///
/// The static grid only ever holds `Empty` and `Occupied`; `Clearing` is
/// substituted into display snapshots while a full row is being animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
    Clearing(ClearStage),
}

impl Cell {
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied)
    }
}

/// A `(row, col)` grid coordinate
///
/// Signed so that tentative positions past an edge can be represented and
/// rejected by the collision check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Offset by `(d_row, d_col)`
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// True if the coordinate lies inside the `HEIGHT` x `WIDTH` grid
    pub const fn in_grid(self) -> bool {
        self.row >= 0 && self.row < HEIGHT as i8 && self.col >= 0 && self.col < WIDTH as i8
    }
}

/// The seven piece templates, in catalog order
///
/// Catalog letters (a-g) follow the template table:
/// - **a / I**: straight bar
/// - **b / O**: 2x2 square
/// - **c / Z**: Z-shaped
/// - **d / S**: S-shaped (mirror of Z)
/// - **e / J**: J-shaped
/// - **f / T**: T-shaped
/// - **g / L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    Z,
    S,
    J,
    T,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::J,
        PieceKind::T,
        PieceKind::L,
    ];

    /// Position in the catalog (0-6)
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::Z => 2,
            PieceKind::S => 3,
            PieceKind::J => 4,
            PieceKind::T => 5,
            PieceKind::L => 6,
        }
    }

    /// Lowercase shape name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::J => "j",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }
}

/// Rotation direction (90°)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    pub fn reverse(self) -> Self {
        match self {
            Turn::Left => Turn::Right,
            Turn::Right => Turn::Left,
        }
    }
}

/// Lateral move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Left,
    Right,
}

impl Shift {
    /// Column delta for this direction
    pub fn delta(self) -> i8 {
        match self {
            Shift::Left => -1,
            Shift::Right => 1,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Shift::Left => Shift::Right,
            Shift::Right => Shift::Left,
        }
    }
}

/// Discrete commands produced by the input source, at most one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Soft drop: one gravity step
    MoveDown,
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    /// Ends the game; during the game-over wait, leaves the program
    Quit,
}
