use tui_blocks::core::{Frame, GameState, Grid};
use tui_blocks::term::{glyph, GameView, Viewport};
use tui_blocks::types::{Cell, ClearStage, PieceKind};

fn rows(view: &GameView, frame: &Frame, vp: Viewport) -> Vec<String> {
    let fb = view.render(frame, vp);
    (0..vp.height)
        .map(|y| fb.row_text(y).trim_end().to_string())
        .collect()
}

#[test]
fn term_view_draws_hash_border() {
    let frame = GameState::new(1).frame();
    let lines = rows(&GameView::default(), &frame, Viewport::new(40, 25));

    assert_eq!(lines[0], "############");
    assert_eq!(lines[21], "############");
    for line in &lines[1..21] {
        assert_eq!(line, "#          #");
    }
    assert_eq!(lines[22], "Score: 0");
    assert_eq!(lines[23], "");
}

#[test]
fn term_view_shows_settled_and_active_cells() {
    let mut game = GameState::with_grid(Grid::from_rows(&["##########"]), 1);
    game.spawn_kind(PieceKind::O);
    let lines = rows(&GameView::default(), &game.frame(), Viewport::new(40, 25));

    assert_eq!(lines[1], "#   OO     #");
    assert_eq!(lines[2], "#   OO     #");
    assert_eq!(lines[20], "#OOOOOOOOOO#");
}

#[test]
fn term_view_wide_cells() {
    let view = GameView::new(2);
    assert_eq!(view.frame_size(), (22, 22));

    let mut frame = GameState::new(1).frame();
    frame.cells[19][0] = Cell::Occupied;
    let lines = rows(&view, &frame, Viewport::new(40, 25));
    assert_eq!(lines[0].len(), 22);
    assert!(lines[20].starts_with("#OO  "));
}

#[test]
fn term_view_game_over_lines() {
    let mut frame = GameState::new(1).frame();
    frame.score = 340;
    frame.game_over = true;
    let lines = rows(&GameView::default(), &frame, Viewport::new(40, 25));

    assert_eq!(lines[22], "Score: 340");
    assert_eq!(lines[23], "GAME OVER! Your score is: 340");
    assert_eq!(lines[24], "Press q to quit");
}

#[test]
fn term_view_clearing_glyphs() {
    assert_eq!(glyph(Cell::Empty), ' ');
    assert_eq!(glyph(Cell::Occupied), 'O');
    let stages: String = ClearStage::ALL
        .iter()
        .map(|&s| glyph(Cell::Clearing(s)))
        .collect();
    assert_eq!(stages, "*-.");
}

#[test]
fn term_view_clips_to_small_viewport() {
    let frame = GameState::new(1).frame();
    let fb = GameView::default().render(&frame, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
    assert_eq!(fb.row_text(0), "#####");
}
