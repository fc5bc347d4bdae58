//! Scoring module - line detection, collapse and the classic score table
//!
//! Rows are scanned from the bottom up. Each full row yields three animation
//! frames, is collapsed, and the same row index is examined again before the
//! scan continues upwards.

use arrayvec::ArrayVec;

use crate::grid::{Grid, GridCells};
use crate::types::{Cell, ClearStage, HEIGHT, LINE_SCORES, WIDTH};

/// At most 4 rows can complete from one landing, 3 stages each
pub const MAX_CLEAR_FRAMES: usize = 12;

/// One animation frame of a line clear
///
/// `cells` is the grid as it stood when the row was found full, with that row
/// replaced by the stage marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearFrame {
    pub row: usize,
    pub stage: ClearStage,
    pub cells: GridCells,
}

/// Result of one line-clear sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    pub lines: u32,
    pub score_delta: u32,
    pub frames: ArrayVec<ClearFrame, MAX_CLEAR_FRAMES>,
}

/// Score for clearing `lines` rows in one sweep
/// 1 -> 40, 2 -> 100, 3 -> 300, 4 -> 1200, anything else -> 0
pub fn line_score(lines: u32) -> u32 {
    LINE_SCORES.get(lines as usize).copied().unwrap_or(0)
}

/// Find and delete every full row, bottom to top.
pub fn check_and_clear_lines(grid: &mut Grid) -> LineClear {
    let mut result = LineClear::default();
    let mut row = HEIGHT;

    while row > 0 {
        let r = row - 1;
        if !grid.is_row_full(r) {
            row -= 1;
            continue;
        }

        let snapshot = grid.to_rows();
        for stage in ClearStage::ALL {
            let mut cells = snapshot;
            cells[r] = [Cell::Clearing(stage); WIDTH];
            // Only reachable past 4 rows, which a single landing cannot produce.
            let _ = result.frames.try_push(ClearFrame {
                row: r,
                stage,
                cells,
            });
        }

        grid.collapse_row(r);
        result.lines += 1;
        // Same index again: the row above has moved into it.
    }

    result.score_delta = line_score(result.lines);
    result
}
