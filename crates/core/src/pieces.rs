//! Pieces module - the template catalog and the active piece
//!
//! Each template is 4 occupied offsets plus 1 pivot offset, all relative to
//! the spawn anchor (row 0, column `WIDTH / 2 - 2`). Offsets are `(row, col)`.

use crate::types::{Coord, PieceKind, SPAWN_COL, SPAWN_ROW};

/// Offset of a single cell relative to the spawn anchor
pub type CellOffset = (i8, i8);

/// A template: 4 occupied offsets and the pivot offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub cells: [CellOffset; 4],
    pub pivot: CellOffset,
}

/// Template table in catalog order (a-g)
const TEMPLATES: [Template; 7] = [
    // a: I
    Template {
        cells: [(0, 0), (0, 1), (0, 2), (0, 3)],
        pivot: (1, 1),
    },
    // b: O
    Template {
        cells: [(0, 0), (0, 1), (1, 0), (1, 1)],
        pivot: (1, 1),
    },
    // c: Z
    Template {
        cells: [(0, 0), (0, 1), (1, 1), (1, 2)],
        pivot: (1, 1),
    },
    // d: S
    Template {
        cells: [(0, 1), (0, 2), (1, 0), (1, 1)],
        pivot: (1, 1),
    },
    // e: J
    Template {
        cells: [(0, 0), (1, 0), (1, 1), (1, 2)],
        pivot: (1, 1),
    },
    // f: T
    Template {
        cells: [(0, 1), (1, 0), (1, 1), (1, 2)],
        pivot: (1, 1),
    },
    // g: L (mirrored J)
    Template {
        cells: [(0, 2), (1, 0), (1, 1), (1, 2)],
        pivot: (1, 1),
    },
];

/// Get the template for a piece kind
pub fn template(kind: PieceKind) -> &'static Template {
    &TEMPLATES[kind.index()]
}

/// The active falling piece: 4 occupied cells and a pivot, in grid coordinates
///
/// The pivot need not be an occupied cell. It moves with the piece under
/// gravity and lateral moves, but never under rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub cells: [Coord; 4],
    pub pivot: Coord,
}

impl Piece {
    /// Instantiate a template at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self::at(kind, Coord::new(SPAWN_ROW, SPAWN_COL))
    }

    /// Instantiate a template at an arbitrary anchor
    pub fn at(kind: PieceKind, anchor: Coord) -> Self {
        let t = template(kind);
        let place = |(r, c): CellOffset| anchor.offset(r, c);
        Self {
            kind,
            cells: t.cells.map(place),
            pivot: place(t.pivot),
        }
    }

    /// Shift all 5 coordinates (cells and pivot)
    pub fn translated(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            kind: self.kind,
            cells: self.cells.map(|c| c.offset(d_row, d_col)),
            pivot: self.pivot.offset(d_row, d_col),
        }
    }

    /// Lowest row reached by any occupied cell
    pub fn bottom(&self) -> i8 {
        self.cells.iter().map(|c| c.row).max().unwrap_or(self.pivot.row)
    }

    /// True if any occupied cell lies above row 0
    pub fn above_top(&self) -> bool {
        self.cells.iter().any(|c| c.row < 0)
    }

    /// Occupied cells sorted by (row, col), for order-insensitive comparison
    pub fn sorted_cells(&self) -> [Coord; 4] {
        let mut cells = self.cells;
        cells.sort_by_key(|c| (c.row, c.col));
        cells
    }
}
