//! Geometry module - collision, merge, gravity, rotation and lateral moves
//!
//! Pure functions over a [`Grid`] and a [`Piece`]. Every tentative position is
//! validated by [`collision`] before it is committed; rejected moves leave the
//! piece exactly as it was (no wall kicks, no partial moves).

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::types::{Coord, Shift, Turn, HEIGHT, WIDTH};

/// Which bounds a collision check enforces
///
/// Neither mode checks the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Floor and settled cells only (gravity, spawn)
    Floor,
    /// Floor, settled cells and both side walls (rotation, lateral moves)
    Sides,
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    /// The piece could not move and has been merged into the grid
    Landed,
}

/// True if any occupied cell of the piece breaches the floor, overlaps a
/// settled cell, or (in `Sides` mode) lies outside the columns.
pub fn collision(grid: &Grid, piece: &Piece, bounds: Bounds) -> bool {
    piece.cells.iter().any(|&c| cell_collides(grid, c, bounds))
}

#[inline]
fn cell_collides(grid: &Grid, c: Coord, bounds: Bounds) -> bool {
    if c.row > HEIGHT as i8 - 1 || grid.is_occupied(c.row, c.col) {
        return true;
    }
    bounds == Bounds::Sides && (c.col < 0 || c.col >= WIDTH as i8)
}

/// Commit the piece: its 4 cells become `Occupied`.
///
/// Only call once a collision check has confirmed the piece cannot move.
pub fn merge(grid: &mut Grid, piece: &Piece) {
    for &c in &piece.cells {
        grid.occupy(c);
    }
}

/// Advance the piece one row. On collision the move is undone, the piece is
/// merged and `Landed` is reported.
///
/// A piece that lands with cells still above row 0 is not merged here; see
/// [`Piece::above_top`]. The caller decides what that means.
pub fn step_down(grid: &mut Grid, piece: &mut Piece) -> Step {
    let moved = piece.translated(1, 0);
    if collision(grid, &moved, Bounds::Floor) {
        if !piece.above_top() {
            merge(grid, piece);
        }
        return Step::Landed;
    }
    *piece = moved;
    Step::Moved
}

/// Rotate 90° about the pivot. Returns the rotated piece, or the original one
/// if the rotated cells collide (walls, floor or settled cells).
pub fn rotate(grid: &Grid, piece: &Piece, turn: Turn) -> Piece {
    let p = piece.pivot;
    let cells = piece.cells.map(|c| {
        let dx = c.row - p.row;
        let dy = c.col - p.col;
        match turn {
            Turn::Left => Coord::new(p.row + dy, p.col - dx),
            Turn::Right => Coord::new(p.row - dy, p.col + dx),
        }
    });
    let rotated = Piece {
        kind: piece.kind,
        cells,
        pivot: p,
    };

    if collision(grid, &rotated, Bounds::Sides) {
        *piece
    } else {
        rotated
    }
}

/// Shift one column left or right. Returns the original piece if the shifted
/// one collides.
pub fn move_side(grid: &Grid, piece: &Piece, shift: Shift) -> Piece {
    let moved = piece.translated(0, shift.delta());
    if collision(grid, &moved, Bounds::Sides) {
        *piece
    } else {
        moved
    }
}
