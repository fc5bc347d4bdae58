//! `Display` implementation that draws to the real terminal.

use anyhow::Result;
use crossterm::terminal;

use crate::core::Frame;
use crate::engine::Display;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback when the terminal size cannot be queried
const FALLBACK_VIEWPORT: (u16, u16) = (80, 24);

pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalDisplay {
    /// Switch the terminal into game mode.
    pub fn enter(view: GameView) -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
        })
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Display for TerminalDisplay {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or(FALLBACK_VIEWPORT);
        self.view
            .render_into(frame, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
