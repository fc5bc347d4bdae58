//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s and provides a
//! non-blocking [`TerminalInput`] for the loop driver.

pub mod map;
pub mod source;

pub use tui_blocks_engine as engine;
pub use tui_blocks_types as types;

pub use map::{command_for_key, Phase};
pub use source::TerminalInput;
