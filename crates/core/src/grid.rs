//! Grid module - the settled cells of the playfield
//!
//! A 20x10 matrix stored as a flat row-major array. Every access goes through
//! a bounds-checked index; reads outside the grid report "not there", writes
//! outside the grid are refused.
//! Coordinates: (row, col), row 0..19 top to bottom, col 0..9 left to right.

use crate::types::{Cell, Coord, HEIGHT, WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = HEIGHT * WIDTH;

/// Row-major cell matrix, as handed to the display
pub type GridCells = [[Cell; WIDTH]; HEIGHT];

/// The static grid - 20 rows x 10 columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    /// Build a grid from text rows, aligned to the bottom of the grid.
    ///
    /// `#` (or `O`) marks an occupied cell, anything else is empty. Rows longer
    /// than the grid width are truncated; missing rows at the top stay empty.
    ///
    /// ```
    /// use tui_blocks_core::Grid;
    ///
    /// let grid = Grid::from_rows(&["#.........", "##########"]);
    /// assert!(grid.is_occupied(18, 0));
    /// assert!(grid.is_row_full(19));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        let skip = rows.len().saturating_sub(HEIGHT);
        let top = HEIGHT - (rows.len() - skip);
        for (i, line) in rows.iter().skip(skip).enumerate() {
            let row = (top + i) as i8;
            for (col, ch) in line.chars().take(WIDTH).enumerate() {
                if matches!(ch, '#' | 'O') {
                    grid.set(row, col as i8, Cell::Occupied);
                }
            }
        }
        grid
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if !Coord::new(row, col).in_grid() {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    /// Get cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Mark a coordinate as permanently occupied.
    ///
    /// # Panics
    ///
    /// Panics if `at` lies outside the grid. Every caller validates positions
    /// with a collision check first, so this never fires in a correct game.
    pub fn occupy(&mut self, at: Coord) {
        let placed = self.set(at.row, at.col, Cell::Occupied);
        assert!(placed, "grid write out of bounds at {:?}", at);
    }

    /// True if within bounds and the cell is `Occupied`
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Cell::Occupied))
    }

    /// True if every column of the row is occupied, scanning from column 0
    /// and stopping at the first gap
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let start = row * WIDTH;
        let filled = self.cells[start..start + WIDTH]
            .iter()
            .take_while(|cell| cell.is_occupied())
            .count();
        filled == WIDTH
    }

    /// Delete a row, shifting every row above it down by one.
    /// Row 0 becomes empty.
    pub fn collapse_row(&mut self, row: usize) {
        if row >= HEIGHT {
            return;
        }

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, r * WIDTH);
        }
        for cell in &mut self.cells[..WIDTH] {
            *cell = Cell::Empty;
        }
    }

    /// Flat view of all cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Copy out as a 2D matrix
    pub fn to_rows(&self) -> GridCells {
        let mut out = [[Cell::Empty; WIDTH]; HEIGHT];
        for (row, chunk) in self.cells.chunks_exact(WIDTH).enumerate() {
            out[row].copy_from_slice(chunk);
        }
        out
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 9), Some(9));
        assert_eq!(Grid::index(1, 0), Some(10));
        assert_eq!(Grid::index(19, 9), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(0, 10), None);
        assert_eq!(Grid::index(20, 0), None);
    }

    #[test]
    fn from_rows_is_bottom_aligned() {
        let grid = Grid::from_rows(&["#", "..#"]);
        assert!(grid.is_occupied(18, 0));
        assert!(grid.is_occupied(19, 2));
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn row_with_gap_is_not_full() {
        let grid = Grid::from_rows(&["#########.", ".#########"]);
        assert!(!grid.is_row_full(18));
        assert!(!grid.is_row_full(19));
        assert!(!grid.is_row_full(HEIGHT));
    }

    #[test]
    fn collapse_row_shifts_rows_above() {
        let mut grid = Grid::new();
        grid.set(0, 1, Cell::Occupied);
        grid.set(5, 2, Cell::Occupied);
        grid.set(10, 3, Cell::Occupied);

        grid.collapse_row(10);

        assert!(grid.is_occupied(1, 1));
        assert!(grid.is_occupied(6, 2));
        assert!(!grid.is_occupied(10, 3));
        assert!((0..WIDTH as i8).all(|c| !grid.is_occupied(0, c)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn occupy_outside_grid_panics() {
        let mut grid = Grid::new();
        grid.occupy(Coord::new(-1, 4));
    }

    #[test]
    fn to_rows_matches_flat_cells() {
        let mut grid = Grid::new();
        grid.set(7, 3, Cell::Occupied);
        let rows = grid.to_rows();
        assert_eq!(rows[7][3], Cell::Occupied);
        assert_eq!(rows[3][7], Cell::Empty);
    }
}
