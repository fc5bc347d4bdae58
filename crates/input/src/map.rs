//! Key mapping from terminal events to commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which part of the game the key arrives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Play,
    GameOver,
}

/// Map a key to a command. Unrecognized keys map to `None`.
///
/// During play:
/// - Arrows: move down / left / right, Up rotates right
/// - `q` / `e` / `x`: rotate right, `w` / `z`: rotate left
/// - Esc, Ctrl-C: quit (ends the game)
///
/// After game over only `q`, Esc and Ctrl-C are recognized, all as quit.
pub fn command_for_key(key: KeyEvent, phase: Phase) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match phase {
        Phase::Play => play_command(key.code),
        Phase::GameOver => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        },
    }
}

fn play_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),

        KeyCode::Up
        | KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Char('e')
        | KeyCode::Char('E')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(Command::RotateRight),
        KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(Command::RotateLeft),

        KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(code: KeyCode) -> Option<Command> {
        command_for_key(KeyEvent::from(code), Phase::Play)
    }

    fn over(code: KeyCode) -> Option<Command> {
        command_for_key(KeyEvent::from(code), Phase::GameOver)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(play(KeyCode::Down), Some(Command::MoveDown));
        assert_eq!(play(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(play(KeyCode::Right), Some(Command::MoveRight));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(play(KeyCode::Char('w')), Some(Command::RotateLeft));
        assert_eq!(play(KeyCode::Char('Z')), Some(Command::RotateLeft));
        assert_eq!(play(KeyCode::Up), Some(Command::RotateRight));
        assert_eq!(play(KeyCode::Char('e')), Some(Command::RotateRight));
    }

    #[test]
    fn test_q_rotates_during_play_and_quits_after() {
        assert_eq!(play(KeyCode::Char('q')), Some(Command::RotateRight));
        assert_eq!(over(KeyCode::Char('q')), Some(Command::Quit));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(play(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(over(KeyCode::Esc), Some(Command::Quit));
        for phase in [Phase::Play, Phase::GameOver] {
            assert_eq!(
                command_for_key(
                    KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    phase
                ),
                Some(Command::Quit)
            );
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(play(KeyCode::Char('c')), None);
        assert_eq!(play(KeyCode::Char(' ')), None);
        assert_eq!(play(KeyCode::Enter), None);
        // Game keys do nothing on the game-over screen
        assert_eq!(over(KeyCode::Left), None);
        assert_eq!(over(KeyCode::Char('w')), None);
    }
}
