//! GameView: maps a core [`Frame`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Layout, top-left anchored:
//!
//! ```text
//! ############
//! #          #   HEIGHT rows of cells between the side borders
//! # OO       #
//! ############
//! Score: 40
//! GAME OVER! Your score is: 40   (game over only)
//! Press q to quit                (game over only)
//! ```

use crate::core::Frame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, ClearStage, HEIGHT, WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BORDER: char = '#';

const BORDER_STYLE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const BLOCK_STYLE: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80)).bold();
const CLEAR_STYLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
const TEXT_STYLE: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));

/// Glyph for a grid cell
pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Occupied => 'O',
        Cell::Clearing(ClearStage::One) => '*',
        Cell::Clearing(ClearStage::Two) => '-',
        Cell::Clearing(ClearStage::Three) => '.',
    }
}

pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Framed grid size in terminal cells (border included)
    pub fn frame_size(&self) -> (u16, u16) {
        (WIDTH as u16 * self.cell_w + 2, HEIGHT as u16 + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &Frame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size();
        self.draw_border(fb, frame_w, frame_h);

        for (row, cells) in frame.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let style = match cell {
                    Cell::Empty => TEXT_STYLE,
                    Cell::Occupied => BLOCK_STYLE,
                    Cell::Clearing(_) => CLEAR_STYLE,
                };
                let x = 1 + col as u16 * self.cell_w;
                for dx in 0..self.cell_w {
                    fb.put_char(x + dx, 1 + row as u16, glyph(cell), style);
                }
            }
        }

        let status_y = frame_h;
        fb.put_str(0, status_y, &format!("Score: {}", frame.score), TEXT_STYLE);
        if frame.game_over {
            let bold = TEXT_STYLE.bold();
            fb.put_str(
                0,
                status_y + 1,
                &format!("GAME OVER! Your score is: {}", frame.score),
                bold,
            );
            fb.put_str(0, status_y + 2, "Press q to quit", TEXT_STYLE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16) {
        for x in 0..w {
            fb.put_char(x, 0, BORDER, BORDER_STYLE);
            fb.put_char(x, h - 1, BORDER, BORDER_STYLE);
        }
        for y in 1..h - 1 {
            fb.put_char(0, y, BORDER, BORDER_STYLE);
            fb.put_char(w - 1, y, BORDER, BORDER_STYLE);
        }
    }
}
