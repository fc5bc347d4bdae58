//! Runtime configuration: command-line flags, each with an environment
//! variable fallback.
//!
//! | Flag | Variable | Default |
//! |------|----------|---------|
//! | `--speed N` | `BLOCKS_SPEED` | 20 ticks per gravity step |
//! | `--tick-ms N` | `BLOCKS_TICK_MS` | 50 |
//! | `--seed N` | `BLOCKS_SEED` | wall clock, read once |
//! | `--log PATH` | `BLOCKS_LOG_PATH` | no journal |
//! | `--cell-width N` | `BLOCKS_CELL_WIDTH` | 1 |

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::engine::DriverConfig;
use crate::types::{CLEAR_STAGE_MS, DEFAULT_SPEED, TICK_MS};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "tui-blocks",
    about = "Falling-block puzzle game for the terminal",
    after_help = "controls: arrows move, q/e/x/Up rotate right, w/z rotate left, \
                  Esc ends the game, q leaves the game-over screen"
)]
pub struct Config {
    /// Loop iterations per gravity step
    #[arg(
        long,
        env = "BLOCKS_SPEED",
        default_value_t = DEFAULT_SPEED,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub speed: u32,

    /// Milliseconds per loop iteration
    #[arg(long, env = "BLOCKS_TICK_MS", default_value_t = TICK_MS)]
    pub tick_ms: u64,

    #[arg(skip = CLEAR_STAGE_MS)]
    pub clear_stage_ms: u64,

    /// Piece sequence seed. If omitted, the wall clock is used.
    #[arg(long, env = "BLOCKS_SEED")]
    pub seed: Option<u64>,

    /// Append a JSONL journal of game events to this file
    #[arg(long = "log", env = "BLOCKS_LOG_PATH", value_name = "PATH")]
    pub log_path: Option<String>,

    /// Terminal columns per grid cell
    #[arg(
        long,
        env = "BLOCKS_CELL_WIDTH",
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub cell_width: u16,
}

impl Config {
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            tick: Duration::from_millis(self.tick_ms),
            speed: self.speed,
            clear_stage: Duration::from_millis(self.clear_stage_ms),
        }
    }

    /// The configured seed, or one taken from the wall clock.
    ///
    /// Called once per process; the game never reseeds.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}
