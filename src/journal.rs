//! Game journal: one JSON object per line for every game event.
//!
//! Enabled with `BLOCKS_LOG_PATH` / `--log`. A journal that cannot be written
//! reports once on stderr and then stays quiet; the game is never interrupted.
//!
//! ```text
//! {"seq":1,"tick":0,"type":"spawned","kind":"t"}
//! {"seq":2,"tick":41,"type":"landed","kind":"t","bottomRow":19}
//! {"seq":3,"tick":41,"type":"spawned","kind":"o"}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameEvent;
use crate::engine::EventSink;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JournalEvent {
    Spawned {
        kind: &'static str,
    },
    #[serde(rename_all = "camelCase")]
    Landed {
        kind: &'static str,
        bottom_row: i8,
    },
    #[serde(rename_all = "camelCase")]
    LinesCleared {
        lines: u32,
        score_delta: u32,
        score: u32,
    },
    GameOver {
        reason: &'static str,
        score: u32,
    },
}

impl From<&GameEvent> for JournalEvent {
    fn from(event: &GameEvent) -> Self {
        match *event {
            GameEvent::Spawned { kind } => JournalEvent::Spawned {
                kind: kind.as_str(),
            },
            GameEvent::Landed { kind, bottom_row } => JournalEvent::Landed {
                kind: kind.as_str(),
                bottom_row,
            },
            GameEvent::LinesCleared {
                lines,
                score_delta,
                score,
            } => JournalEvent::LinesCleared {
                lines,
                score_delta,
                score,
            },
            GameEvent::GameOver { reason, score } => JournalEvent::GameOver {
                reason: reason.as_str(),
                score,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Record {
    seq: u64,
    tick: u64,
    #[serde(flatten)]
    event: JournalEvent,
}

pub struct Journal<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
    failed: bool,
}

impl Journal<BufWriter<File>> {
    /// Append to (or create) the file at `path`.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
            failed: false,
        }
    }

    /// Records written so far
    pub fn len(&self) -> u64 {
        self.seq
    }

    pub fn is_empty(&self) -> bool {
        self.seq == 0
    }

    pub fn write(&mut self, tick: u64, event: &GameEvent) -> Result<()> {
        self.seq += 1;
        let record = Record {
            seq: self.seq,
            tick,
            event: event.into(),
        };
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for Journal<W> {
    fn record(&mut self, tick: u64, event: &GameEvent) {
        if self.failed {
            return;
        }
        if let Err(e) = self.write(tick, event) {
            eprintln!("[Journal] write failed, journal disabled: {:#}", e);
            self.failed = true;
        }
    }
}

/// Open the configured journal, if any. Failure to open is reported and
/// the game runs without one.
pub fn open_configured(path: Option<&str>) -> Option<Journal<BufWriter<File>>> {
    let path = path?;
    match Journal::open(path) {
        Ok(journal) => Some(journal),
        Err(e) => {
            eprintln!("[Journal] {:#}", e);
            None
        }
    }
}
