//! The fixed-timestep loop around a [`GameState`].
//!
//! One iteration: draw, wait one tick, apply at most one command, then let the
//! gravity clock decide whether the piece falls. Line-clear animations are
//! drawn from the tick report, one pause per stage. The loop ends only when
//! the game is over (a `Quit` command ends the game too); the final frame is
//! then drawn and the driver blocks until `Quit` is read.

use std::time::Duration;

use anyhow::Result;

use crate::core::{Frame, GameEvent, GameOverReason, GameState, TickReport};
use crate::scheduler::{GravityClock, Pacer};
use crate::types::{Command, CLEAR_STAGE_MS, DEFAULT_SPEED, TICK_MS};

/// Receives one frame per draw.
pub trait Display {
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        (**self).render(frame)
    }
}

/// Produces discrete commands.
///
/// The two methods serve different phases, so an implementation may map the
/// same key differently in each.
pub trait Input {
    /// During play. Non-blocking; `None` means no key this tick.
    fn poll(&mut self) -> Result<Option<Command>>;

    /// After game over. Blocks until the next recognized command.
    fn wait(&mut self) -> Result<Command>;
}

/// Observes game events (journal, statistics).
pub trait EventSink {
    fn record(&mut self, tick: u64, event: &GameEvent);
}

impl<S: EventSink> EventSink for Option<S> {
    fn record(&mut self, tick: u64, event: &GameEvent) {
        if let Some(sink) = self {
            sink.record(tick, event);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub tick: Duration,
    /// Iterations per gravity step
    pub speed: u32,
    /// Pause after each line-clear animation stage
    pub clear_stage: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            speed: DEFAULT_SPEED,
            clear_stage: Duration::from_millis(CLEAR_STAGE_MS),
        }
    }
}

/// How a run ended. Either way the player has seen the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player quit while the game was still running
    Abandoned { score: u32 },
    /// The stack reached the top
    GameOver { score: u32 },
}

impl Outcome {
    pub fn score(&self) -> u32 {
        match *self {
            Outcome::Abandoned { score } | Outcome::GameOver { score } => score,
        }
    }
}

pub struct Driver<D, I, P, S> {
    display: D,
    input: I,
    pacer: P,
    sink: S,
    config: DriverConfig,
    clock: GravityClock,
    tick: u64,
}

impl<D, I, P, S> Driver<D, I, P, S>
where
    D: Display,
    I: Input,
    P: Pacer,
    S: EventSink,
{
    pub fn new(display: D, input: I, pacer: P, sink: S, config: DriverConfig) -> Self {
        Self {
            display,
            input,
            pacer,
            sink,
            clock: GravityClock::new(config.speed),
            config,
            tick: 0,
        }
    }

    /// Iterations completed so far
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (D, I, P, S) {
        (self.display, self.input, self.pacer, self.sink)
    }

    /// Run until the game is over and the player has acknowledged it.
    pub fn run(&mut self, game: &mut GameState) -> Result<Outcome> {
        let report = game.start();
        self.absorb(&report)?;

        while !game.game_over() {
            self.iterate(game)?;
        }

        self.display.render(&game.frame())?;
        while self.input.wait()? != Command::Quit {}

        let score = game.score();
        Ok(match game.game_over_reason() {
            Some(GameOverReason::Abandoned) => Outcome::Abandoned { score },
            _ => Outcome::GameOver { score },
        })
    }

    /// One loop iteration.
    pub fn iterate(&mut self, game: &mut GameState) -> Result<()> {
        self.display.render(&game.frame())?;
        self.pacer.pause(self.config.tick);
        self.tick += 1;

        if let Some(command) = self.input.poll()? {
            let report = game.apply_command(command);
            self.absorb(&report)?;
        }

        if self.clock.advance() && !game.game_over() {
            let report = game.gravity();
            self.absorb(&report)?;
        }
        Ok(())
    }

    fn absorb(&mut self, report: &TickReport) -> Result<()> {
        for frame in report.animation() {
            self.display.render(&frame)?;
            self.pacer.pause(self.config.clear_stage);
        }
        for event in &report.events {
            self.sink.record(self.tick, event);
        }
        Ok(())
    }
}
