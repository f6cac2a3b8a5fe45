//! JSON-lines placement journal.
//!
//! One record per committed piece plus a closing summary. Records are
//! serialised with serde and written one per line.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::{Session, StepReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "placement")]
    Placement,
    #[serde(rename = "summary")]
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub index: u32,
    pub kind: String,
    pub column: u8,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    pub height_penalty: u32,
    pub holes: u32,
    pub total_penalty: u32,
    pub lines_cleared: u32,
}

impl PlacementRecord {
    pub fn new(index: u32, report: &StepReport) -> Self {
        Self {
            record_type: RecordType::Placement,
            index,
            kind: report.piece.kind.as_str().to_string(),
            column: report.mv.column,
            rotation: report.mv.rotation,
            x: report.piece.x,
            y: report.piece.y,
            height_penalty: report.penalty.height,
            holes: report.penalty.holes,
            total_penalty: report.penalty.total(),
            lines_cleared: report.lines_cleared,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub seed: u32,
    pub pieces: u32,
    pub lines: u32,
    pub level: u32,
    pub game_over: bool,
}

impl SummaryRecord {
    pub fn new(session: &Session) -> Self {
        Self {
            record_type: RecordType::Summary,
            seed: session.seed(),
            pieces: session.pieces_placed(),
            lines: session.lines(),
            level: session.level(),
            game_over: session.game_over(),
        }
    }
}

/// Line-oriented JSON writer; a no-op when no sink is configured.
pub struct Journal<W: Write> {
    sink: Option<W>,
    buf: Vec<u8>,
}

impl Journal<BufWriter<File>> {
    /// Append to the file at `path` (created if missing), or write nothing when `None`.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let sink = match path {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("opening journal {}", path))?;
                Some(BufWriter::new(file))
            }
            None => None,
        };
        Ok(Self::from_sink(sink))
    }
}

impl<W: Write> Journal<W> {
    pub fn from_sink(sink: Option<W>) -> Self {
        Self {
            sink,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn placement(&mut self, index: u32, report: &StepReport) -> Result<()> {
        self.write_record(&PlacementRecord::new(index, report))
    }

    pub fn summary(&mut self, session: &Session) -> Result<()> {
        self.write_record(&SummaryRecord::new(session))
    }

    fn write_record<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        sink.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Hand back the sink (for inspecting in-memory journals).
    pub fn into_sink(self) -> Option<W> {
        self.sink
    }
}
