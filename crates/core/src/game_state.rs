//! Game state module - owns the grid, the active piece, the score and the
//! terminal flag, and orchestrates spawn, gravity, merge and line clears.
//!
//! One `GameState` is owned by the loop and passed by `&mut` into every
//! operation. Once the game is over every command is a no-op.

use crate::geometry::{self, Step};
use crate::grid::Grid;
use crate::pieces::Piece;
use crate::rng::PieceRandomizer;
use crate::scoring::check_and_clear_lines;
use crate::snapshot::{Frame, GameEvent, GameOverReason, TickReport};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<Piece>,
    randomizer: PieceRandomizer,
    score: u32,
    /// Total lines cleared this run
    lines: u32,
    /// Successful spawns this run
    pieces: u32,
    started: bool,
    game_over: bool,
    game_over_reason: Option<GameOverReason>,
}

impl GameState {
    /// Create a new game with an empty grid and the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_grid(Grid::new(), seed)
    }

    /// Create a game over a pre-filled grid
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            active: None,
            randomizer: PieceRandomizer::new(seed),
            score: 0,
            lines: 0,
            pieces: 0,
            started: false,
            game_over: false,
            game_over_reason: None,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) -> TickReport {
        let mut report = TickReport::new(self.score);
        if self.started {
            return report;
        }
        self.started = true;
        let kind = self.randomizer.draw();
        self.spawn_into(kind, &mut report);
        report
    }

    /// Spawn a specific template, replacing any active piece.
    ///
    /// Same contract as a random spawn: if the new piece collides the game is
    /// over and no piece is installed.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> TickReport {
        let mut report = TickReport::new(self.score);
        if self.game_over {
            return report;
        }
        self.started = true;
        self.spawn_into(kind, &mut report);
        report
    }

    fn spawn_into(&mut self, kind: PieceKind, report: &mut TickReport) {
        let piece = Piece::spawn(kind);
        if geometry::collision(&self.grid, &piece, geometry::Bounds::Floor) {
            self.active = None;
            self.finish(GameOverReason::BlockedSpawn, report);
            return;
        }
        self.active = Some(piece);
        self.pieces += 1;
        report.push_event(GameEvent::Spawned { kind });
    }

    fn finish(&mut self, reason: GameOverReason, report: &mut TickReport) {
        self.game_over = true;
        self.game_over_reason = Some(reason);
        report.push_event(GameEvent::GameOver {
            reason,
            score: self.score,
        });
    }

    fn is_live(&self) -> bool {
        self.started && !self.game_over
    }

    /// Apply one discrete command.
    ///
    /// `Quit` ends the game the same way a blocked spawn does; see [`abandon`].
    ///
    /// [`abandon`]: GameState::abandon
    pub fn apply_command(&mut self, command: Command) -> TickReport {
        match command {
            Command::MoveDown => self.soft_drop(),
            Command::MoveLeft => self.shift_report(Shift::Left),
            Command::MoveRight => self.shift_report(Shift::Right),
            Command::RotateLeft => self.turn_report(Turn::Left),
            Command::RotateRight => self.turn_report(Turn::Right),
            Command::Quit => self.abandon(),
        }
    }

    /// End the game at the player's request, keeping the board as it is.
    pub fn abandon(&mut self) -> TickReport {
        let mut report = TickReport::new(self.score);
        if !self.game_over {
            self.finish(GameOverReason::Abandoned, &mut report);
        }
        report
    }

    /// Fixed-timestep gravity: one row down
    pub fn gravity(&mut self) -> TickReport {
        self.step()
    }

    /// Explicit soft drop, identical to a gravity step
    pub fn soft_drop(&mut self) -> TickReport {
        self.step()
    }

    fn step(&mut self) -> TickReport {
        let mut report = TickReport::new(self.score);
        if !self.is_live() {
            return report;
        }
        let Some(mut piece) = self.active else {
            return report;
        };

        match geometry::step_down(&mut self.grid, &mut piece) {
            Step::Moved => {
                self.active = Some(piece);
                report.moved = true;
            }
            Step::Landed => {
                self.active = None;
                report.landed = true;
                report.push_event(GameEvent::Landed {
                    kind: piece.kind,
                    bottom_row: piece.bottom(),
                });

                if piece.above_top() {
                    // Keep what fits so the final frame shows the stack.
                    for c in piece.cells {
                        self.grid.set(c.row, c.col, Cell::Occupied);
                    }
                    self.finish(GameOverReason::TopOut, &mut report);
                    return report;
                }

                let clear = check_and_clear_lines(&mut self.grid);
                if clear.lines > 0 {
                    self.score += clear.score_delta;
                    self.lines += clear.lines;
                    report.lines_cleared = clear.lines;
                    report.score_delta = clear.score_delta;
                    report.clear_frames = clear.frames;
                    report.push_event(GameEvent::LinesCleared {
                        lines: clear.lines,
                        score_delta: clear.score_delta,
                        score: self.score,
                    });
                }

                let kind = self.randomizer.draw();
                self.spawn_into(kind, &mut report);
            }
        }
        report
    }

    /// Shift the active piece one column. Returns false if rejected or idle.
    pub fn move_side(&mut self, shift: Shift) -> bool {
        if !self.is_live() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let next = geometry::move_side(&self.grid, &piece, shift);
        self.active = Some(next);
        next != piece
    }

    /// Rotate the active piece 90°. Returns false if rejected or idle.
    pub fn rotate(&mut self, turn: Turn) -> bool {
        if !self.is_live() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let next = geometry::rotate(&self.grid, &piece, turn);
        self.active = Some(next);
        next != piece
    }

    fn shift_report(&mut self, shift: Shift) -> TickReport {
        let mut report = TickReport::new(self.score);
        report.moved = self.move_side(shift);
        report
    }

    fn turn_report(&mut self, turn: Turn) -> TickReport {
        let mut report = TickReport::new(self.score);
        report.moved = self.rotate(turn);
        report
    }

    /// Snapshot for the display: static grid with the active piece overlaid
    pub fn frame(&self) -> Frame {
        let mut cells = self.grid.to_rows();
        if let Some(piece) = self.active {
            for c in piece.cells.iter().filter(|c| c.in_grid()) {
                cells[c.row as usize][c.col as usize] = Cell::Occupied;
            }
        }
        Frame {
            cells,
            score: self.score,
            game_over: self.game_over,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the settled cells, for setting up positions
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_spawns_once() {
        let mut state = GameState::new(12345);
        assert!(!state.started());
        assert!(state.active().is_none());

        let report = state.start();
        assert!(state.started());
        assert!(state.active().is_some());
        assert!(matches!(report.events[0], GameEvent::Spawned { .. }));

        let again = state.start();
        assert!(again.is_idle());
        assert_eq!(state.pieces(), 1);
    }

    #[test]
    fn commands_before_start_do_nothing() {
        let mut state = GameState::new(1);
        assert!(state.apply_command(Command::MoveDown).is_idle());
        assert!(!state.move_side(Shift::Left));
        assert!(!state.rotate(Turn::Right));
    }

    #[test]
    fn quit_ends_the_game_once() {
        let mut state = GameState::new(1);
        state.spawn_kind(PieceKind::T);
        let before = state.active();

        let report = state.apply_command(Command::Quit);
        assert!(state.game_over());
        assert_eq!(state.game_over_reason(), Some(GameOverReason::Abandoned));
        assert_eq!(
            report.events.as_slice(),
            &[GameEvent::GameOver {
                reason: GameOverReason::Abandoned,
                score: 0,
            }]
        );
        assert_eq!(state.active(), before);
        assert!(state.frame().game_over);

        assert!(state.apply_command(Command::Quit).is_idle());
        assert!(state.apply_command(Command::MoveDown).is_idle());
    }

    #[test]
    fn frame_overlays_active_piece() {
        let mut state = GameState::new(1);
        state.spawn_kind(PieceKind::O);
        let frame = state.frame();
        assert_eq!(frame.cells[0][3], Cell::Occupied);
        assert_eq!(frame.cells[1][4], Cell::Occupied);
        assert_eq!(state.grid().occupied_count(), 0);
        assert!(!frame.game_over);
    }

    #[test]
    fn rejected_rotation_reports_no_move() {
        let mut state = GameState::new(1);
        state.spawn_kind(PieceKind::O);
        let before = state.active();

        // A left turn of the square at spawn needs (0, 5).
        state.grid_mut().set(0, 5, Cell::Occupied);
        assert!(!state.rotate(Turn::Left));
        assert_eq!(state.active(), before);

        assert!(state.rotate(Turn::Right));
        assert_ne!(state.active(), before);
    }
}
