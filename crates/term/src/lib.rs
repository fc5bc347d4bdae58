//! Terminal "game renderer" module.
//!
//! Renders core frames into a simple framebuffer that is flushed to the
//! terminal with crossterm, writing only the cells that changed.
//!
//! - [`game_view`]: pure frame -> framebuffer mapping (border, glyphs, status)
//! - [`renderer`]: full/diff encoding and terminal setup/teardown
//! - [`display`]: the loop driver's [`Display`](crate::engine::Display) sink

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_types as types;

pub use display::TerminalDisplay;
pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use game_view::{glyph, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
