//! Journal tests - a whole game written through the loop driver

use std::time::Duration;

use anyhow::Result;

use tui_blocks::core::{Frame, GameState, Grid};
use tui_blocks::engine::{Display, Driver, DriverConfig, Input, Pacer};
use tui_blocks::journal::Journal;
use tui_blocks::types::{Command, PieceKind};

struct Blind;

impl Display for Blind {
    fn render(&mut self, _frame: &Frame) -> Result<()> {
        Ok(())
    }
}

struct Drops(u32);

impl Input for Drops {
    fn poll(&mut self) -> Result<Option<Command>> {
        if self.0 == 0 {
            return Ok(Some(Command::Quit));
        }
        self.0 -= 1;
        Ok(Some(Command::MoveDown))
    }

    fn wait(&mut self) -> Result<Command> {
        Ok(Command::Quit)
    }
}

struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _duration: Duration) {}
}

#[test]
fn journal_records_landing_clear_and_quit() {
    let mut game = GameState::with_grid(Grid::from_rows(&["###....###"]), 1);
    game.spawn_kind(PieceKind::I);

    let config = DriverConfig {
        speed: 1000,
        ..DriverConfig::default()
    };
    let mut driver = Driver::new(Blind, Drops(20), NoPause, Journal::new(Vec::new()), config);
    driver.run(&mut game).unwrap();

    let (_, _, _, journal) = driver.into_parts();
    let out = String::from_utf8(journal.into_inner()).unwrap();
    let records: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let types: Vec<&str> = records
        .iter()
        .map(|r| r["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, ["landed", "linesCleared", "spawned", "gameOver"]);

    assert_eq!(records[0]["kind"], "i");
    assert_eq!(records[0]["bottomRow"], 19);
    assert_eq!(records[1]["score"], 40);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["seq"], i as u64 + 1);
    }
    for record in &records[..3] {
        assert_eq!(record["tick"], 20);
    }

    // Quitting on the next tick ends the game
    assert_eq!(records[3]["tick"], 21);
    assert_eq!(records[3]["reason"], "abandoned");
    assert_eq!(records[3]["score"], 40);
}
