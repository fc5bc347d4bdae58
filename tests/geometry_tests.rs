//! Geometry tests - collision modes, rotation and lateral moves across the
//! whole grid

use tui_blocks::core::{
    collision, merge, move_side, rotate, step_down, Bounds, Grid, Piece, Step,
};
use tui_blocks::types::{Cell, Coord, PieceKind, Shift, Turn, HEIGHT, WIDTH};

fn expected_collision(grid: &Grid, piece: &Piece, bounds: Bounds) -> bool {
    piece.cells.iter().any(|c| {
        let floor = c.row >= HEIGHT as i8;
        let settled = grid.get(c.row, c.col) == Some(Cell::Occupied);
        let side = c.col < 0 || c.col >= WIDTH as i8;
        floor || settled || (bounds == Bounds::Sides && side)
    })
}

#[test]
fn test_collision_matches_brute_force_everywhere() {
    let grid = Grid::from_rows(&["#...#....#", "##.####.##"]);

    for kind in PieceKind::ALL {
        for row in -3..HEIGHT as i8 + 2 {
            for col in -4..WIDTH as i8 + 2 {
                let piece = Piece::at(kind, Coord::new(row, col));
                for bounds in [Bounds::Floor, Bounds::Sides] {
                    assert_eq!(
                        collision(&grid, &piece, bounds),
                        expected_collision(&grid, &piece, bounds),
                        "{:?} at ({}, {}) {:?}",
                        kind,
                        row,
                        col,
                        bounds
                    );
                }
            }
        }
    }
}

#[test]
fn test_rotation_keeps_pivot_and_undoes() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        let piece = Piece::at(kind, Coord::new(8, 3));
        for turn in [Turn::Left, Turn::Right] {
            let turned = rotate(&grid, &piece, turn);
            assert_eq!(turned.pivot, piece.pivot);
            let back = rotate(&grid, &turned, turn.reverse());
            assert_eq!(back.sorted_cells(), piece.sorted_cells(), "{:?} {:?}", kind, turn);
        }
    }
}

#[test]
fn test_four_turns_return_to_start() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        let piece = Piece::at(kind, Coord::new(8, 3));
        let mut turned = piece;
        for _ in 0..4 {
            turned = rotate(&grid, &turned, Turn::Right);
        }
        assert_eq!(turned.sorted_cells(), piece.sorted_cells());
    }
}

#[test]
fn test_rotation_into_wall_is_rejected() {
    let grid = Grid::new();
    // Vertical I hugging the right wall: turning back to horizontal would
    // push cells past column 9.
    let mut piece = rotate(&grid, &Piece::spawn(PieceKind::I), Turn::Left);
    for _ in 0..4 {
        piece = move_side(&grid, &piece, Shift::Right);
    }
    assert!(piece.cells.iter().all(|c| c.col == 9));

    let turned = rotate(&grid, &piece, Turn::Right);
    assert_eq!(turned, piece);
}

#[test]
fn test_move_side_and_back() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        let piece = Piece::at(kind, Coord::new(5, 3));
        for shift in [Shift::Left, Shift::Right] {
            let moved = move_side(&grid, &piece, shift);
            assert_ne!(moved, piece);
            assert_eq!(move_side(&grid, &moved, shift.reverse()), piece);
        }
    }
}

#[test]
fn test_move_side_stops_at_walls() {
    let grid = Grid::new();
    let mut piece = Piece::spawn(PieceKind::O);
    for _ in 0..WIDTH {
        piece = move_side(&grid, &piece, Shift::Left);
    }
    assert_eq!(piece.cells.iter().map(|c| c.col).min(), Some(0));

    for _ in 0..WIDTH {
        piece = move_side(&grid, &piece, Shift::Right);
    }
    assert_eq!(piece.cells.iter().map(|c| c.col).max(), Some(WIDTH as i8 - 1));
}

#[test]
fn test_move_side_blocked_by_settled_cells() {
    let mut grid = Grid::new();
    grid.set(0, 2, Cell::Occupied);
    grid.set(1, 5, Cell::Occupied);
    let piece = Piece::spawn(PieceKind::O);

    // O covers columns 3 and 4 of rows 0 and 1
    assert_eq!(move_side(&grid, &piece, Shift::Left), piece);
    assert_eq!(move_side(&grid, &piece, Shift::Right), piece);

    // One row lower the left neighbour is free
    let lower = piece.translated(1, 0);
    let moved = move_side(&grid, &lower, Shift::Left);
    assert_eq!(moved, lower.translated(0, -1));
}

#[test]
fn test_rotation_through_floor_is_rejected() {
    let grid = Grid::new();
    // Horizontal I resting on the floor, pivot one row below it
    let piece = Piece::spawn(PieceKind::I).translated(19, 0);
    assert_eq!(piece.bottom(), 19);
    assert!(!collision(&grid, &piece, Bounds::Sides));

    for turn in [Turn::Left, Turn::Right] {
        let turned = rotate(&grid, &piece, turn);
        assert_eq!(turned, piece, "{:?}", turn);
        assert_eq!(turned.pivot, Coord::new(20, 4));
    }
}

#[test]
fn test_rotation_into_settled_cell_is_rejected() {
    let mut grid = Grid::new();
    let piece = Piece::at(PieceKind::I, Coord::new(8, 3));
    // The vertical I after a left turn occupies column 5, rows 8..=11
    grid.set(11, 5, Cell::Occupied);

    assert_eq!(rotate(&grid, &piece, Turn::Left), piece);
}

#[test]
fn test_step_down_lands_on_floor_and_merges() {
    let mut grid = Grid::new();
    let mut piece = Piece::spawn(PieceKind::O);

    let mut steps = 0;
    while step_down(&mut grid, &mut piece) == Step::Moved {
        steps += 1;
    }
    assert_eq!(steps, 18);
    assert_eq!(piece.bottom(), 19);
    for c in piece.cells {
        assert!(grid.is_occupied(c.row, c.col));
    }
    assert_eq!(grid.occupied_count(), 4);
}

#[test]
fn test_step_down_lands_on_stack() {
    let mut grid = Grid::from_rows(&["...#......"]);
    let mut piece = Piece::spawn(PieceKind::O);

    while step_down(&mut grid, &mut piece) == Step::Moved {}
    assert_eq!(piece.bottom(), 18);
    assert_eq!(grid.occupied_count(), 5);
}

#[test]
fn test_step_down_above_top_does_not_merge() {
    let mut grid = Grid::new();
    grid.set(3, 3, Cell::Occupied);
    let mut piece = rotate(&grid, &Piece::spawn(PieceKind::I), Turn::Right);
    assert!(piece.above_top());

    assert_eq!(step_down(&mut grid, &mut piece), Step::Landed);
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_merge_sets_exactly_four_cells() {
    let mut grid = Grid::new();
    let piece = Piece::at(PieceKind::T, Coord::new(10, 2));
    merge(&mut grid, &piece);
    assert_eq!(grid.occupied_count(), 4);
    assert!(collision(&grid, &piece, Bounds::Floor));
}
