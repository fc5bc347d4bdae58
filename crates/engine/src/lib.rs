//! Loop driver - the boundary between the deterministic core and the outside
//!
//! The core only knows commands and gravity steps. This crate owns time:
//! the fixed tick, the gravity divisor, animation pacing, and the traits the
//! terminal front end implements ([`Display`], [`Input`]).

pub mod driver;
pub mod scheduler;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use driver::{Display, Driver, DriverConfig, EventSink, Input, Outcome};
pub use scheduler::{GravityClock, Pacer, ThreadPacer};
