//! Terminal runner (default binary).
//!
//! Sets up the terminal, runs the fixed-timestep loop until the game-over
//! screen is dismissed, and always restores the terminal on the way out.

use anyhow::Result;
use clap::Parser;

use tui_blocks::config::Config;
use tui_blocks::core::GameState;
use tui_blocks::engine::{Driver, Outcome, ThreadPacer};
use tui_blocks::input::TerminalInput;
use tui_blocks::journal;
use tui_blocks::term::{GameView, TerminalDisplay};

fn main() -> Result<()> {
    let config = Config::parse();
    let mut game = GameState::new(config.resolve_seed());

    let mut display = TerminalDisplay::enter(GameView::new(config.cell_width))?;
    let result = run(&mut display, &mut game, &config);

    // Always try to restore terminal state.
    let _ = display.exit();

    let outcome = result?;
    if let Outcome::Abandoned { .. } = outcome {
        println!("Game abandoned.");
    }
    println!("Score: {} (seed {})", outcome.score(), game.seed());
    Ok(())
}

fn run(display: &mut TerminalDisplay, game: &mut GameState, config: &Config) -> Result<Outcome> {
    let journal = journal::open_configured(config.log_path.as_deref());
    let mut driver = Driver::new(
        display,
        TerminalInput::new(),
        ThreadPacer::new(),
        journal,
        config.driver_config(),
    );
    driver.run(game)
}
