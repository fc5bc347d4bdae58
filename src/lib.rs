//! TUI Blocks (workspace facade crate).
//!
//! Re-exports the member crates as `tui_blocks::{types, core, engine, input, term}`
//! and adds the application layer: [`config`] and the [`journal`].

pub mod config;
pub mod journal;

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;
