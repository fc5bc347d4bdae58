//! Core game logic - pure, deterministic, and testable
//!
//! Grid model, piece catalog, collision/rotation geometry, gravity, line
//! clears and scoring. No terminal, timing or I/O dependencies: the loop
//! driver feeds it commands and gravity ticks and reads back frames.
//!
//! # Module Structure
//!
//! - [`grid`]: 20x10 bounds-checked cell matrix
//! - [`pieces`]: the 7 templates and the active [`Piece`]
//! - [`geometry`]: collision (floor / sides), merge, step, rotate, move
//! - [`scoring`]: bottom-up line clear with animation frames, 40/100/300/1200
//! - [`rng`]: uniform template selection, seeded once
//! - [`game_state`]: spawn / gravity / merge / clear orchestration
//! - [`snapshot`]: frames, tick reports and game events
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::GameState;
//! use tui_blocks_types::{Command, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn_kind(PieceKind::O);
//!
//! for _ in 0..18 {
//!     assert!(game.apply_command(Command::MoveDown).moved);
//! }
//! let report = game.apply_command(Command::MoveDown);
//! assert!(report.landed);
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```

pub mod game_state;
pub mod geometry;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blocks_types as types;

pub use game_state::GameState;
pub use geometry::{collision, merge, move_side, rotate, step_down, Bounds, Step};
pub use grid::{Grid, GridCells};
pub use pieces::{template, Piece, Template};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{check_and_clear_lines, line_score, ClearFrame, LineClear};
pub use snapshot::{Frame, GameEvent, GameOverReason, TickReport};
