//! Display snapshots and per-tick reports
//!
//! The core never draws. It hands out plain-data [`Frame`]s and reports what a
//! tick did (landing, clears, animation frames, events) so the loop driver can
//! pace the animation and the journal can record it.

use arrayvec::ArrayVec;

use crate::grid::GridCells;
use crate::scoring::{ClearFrame, MAX_CLEAR_FRAMES};
use crate::types::PieceKind;

/// Everything the display needs for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub cells: GridCells,
    pub score: u32,
    pub game_over: bool,
}

impl Frame {
    /// Frame for a line-clear animation stage
    pub fn from_clear(clear: &ClearFrame, score: u32) -> Self {
        Self {
            cells: clear.cells,
            score,
            game_over: false,
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// A freshly spawned piece overlapped settled cells
    BlockedSpawn,
    /// A piece landed with cells still above the top row
    TopOut,
    /// The player quit mid-game
    Abandoned,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::BlockedSpawn => "blockedSpawn",
            GameOverReason::TopOut => "topOut",
            GameOverReason::Abandoned => "abandoned",
        }
    }
}

/// Notable state transitions, in the order they happened within a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Spawned { kind: PieceKind },
    Landed { kind: PieceKind, bottom_row: i8 },
    LinesCleared { lines: u32, score_delta: u32, score: u32 },
    GameOver { reason: GameOverReason, score: u32 },
}

/// Upper bound on events per tick (landed, cleared, spawned or game over)
pub const MAX_TICK_EVENTS: usize = 4;

/// What one command or gravity step did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The piece changed position (move, rotation or one row down)
    pub moved: bool,
    pub landed: bool,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// Score before this tick's clear was added
    pub score_before: u32,
    pub clear_frames: ArrayVec<ClearFrame, MAX_CLEAR_FRAMES>,
    pub events: ArrayVec<GameEvent, MAX_TICK_EVENTS>,
}

impl TickReport {
    pub fn new(score_before: u32) -> Self {
        Self {
            score_before,
            ..Self::default()
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        let _ = self.events.try_push(event);
    }

    /// True if nothing happened
    pub fn is_idle(&self) -> bool {
        !self.moved && !self.landed && self.events.is_empty()
    }

    /// Frames to show before the post-clear state, each with the pre-clear score
    pub fn animation(&self) -> impl Iterator<Item = Frame> + '_ {
        self.clear_frames
            .iter()
            .map(move |f| Frame::from_clear(f, self.score_before))
    }
}
