//! Terminal command source backed by crossterm events.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::Input;
use crate::map::{command_for_key, Phase};
use crate::types::Command;

/// Reads key presses from the terminal. Releases and auto-repeats are
/// dropped, as are keys with no command.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

fn press_command(key: KeyEvent, phase: Phase) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    command_for_key(key, phase)
}

impl Input for TerminalInput {
    fn poll(&mut self) -> Result<Option<Command>> {
        // Drain whatever is pending; the first recognized press wins.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = press_command(key, Phase::Play) {
                    return Ok(Some(command));
                }
            }
        }
        Ok(None)
    }

    fn wait(&mut self) -> Result<Command> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = press_command(key, Phase::GameOver) {
                    return Ok(command);
                }
            }
        }
    }
}
