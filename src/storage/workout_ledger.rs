// ABOUTME: Append-only workout ledger stored as a header-first CSV file
// ABOUTME: Resolves columns by header name and reports malformed rows per caller policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Ledger
//!
//! File layout:
//!
//! ```text
//! Name,Type,Duration,Calories Burned,Date
//! Morning run,Cardio,30,300,2024-01-01
//! ```
//!
//! The header is written exactly once, when the first row goes into a
//! missing or blank file (nothing but whitespace). Rows are never rewritten. Readers look columns up
//! by name, so a hand-edited file may reorder them or add extra ones; the
//! writer follows whatever order the existing header uses. When a name
//! appears twice, the first column with that name is the one used.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use mai_coach_core::constants::ledger::{
    COL_CALORIES, COL_DATE, COL_DURATION, COL_NAME, COL_TYPE, HEADER,
};
use mai_coach_core::models::{EntryDate, WorkoutEntry};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::errors::{AppError, ErrorCode};

/// Ledger failures
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger file could not be read or written
    #[error("Ledger I/O error: {0}")]
    Io(#[from] io::Error),

    /// The CSV layer rejected the file
    #[error("Ledger CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header lacks required columns
    #[error("Ledger is missing required columns: {}", missing.join(", "))]
    SchemaMismatch {
        /// Required columns not present in the header
        missing: Vec<String>,
    },

    /// A data row could not be turned into an entry
    #[error("Malformed ledger row at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the file
        line: u64,
        /// What was wrong with the row
        reason: String,
    },
}

impl From<LedgerError> for AppError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::SchemaMismatch { ref missing } => {
                let details = serde_json::json!({ "missing": missing });
                Self::new(ErrorCode::SchemaMismatch, error.to_string()).with_details(details)
            }
            LedgerError::MalformedRecord { line, .. } => {
                let details = serde_json::json!({ "line": line });
                Self::new(ErrorCode::MalformedRecord, error.to_string()).with_details(details)
            }
            LedgerError::Io(_) | LedgerError::Csv(_) => {
                Self::storage(error.to_string()).with_source(error)
            }
        }
    }
}

/// What `load_all` does with a row it cannot parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Fail the whole load on the first bad row
    Abort,
    /// Log a warning, record the row, keep going
    #[default]
    SkipAndWarn,
}

/// A data row left out of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: u64,
    /// Why the row was skipped
    pub reason: String,
}

/// Everything read from the ledger in one load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSnapshot {
    entries: Vec<WorkoutEntry>,
    skipped: Vec<SkippedRow>,
    absent: bool,
}

impl LedgerSnapshot {
    fn absent() -> Self {
        Self {
            absent: true,
            ..Self::default()
        }
    }

    /// Entries in append order
    #[must_use]
    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    /// Consume the snapshot, keeping only the entries
    #[must_use]
    pub fn into_entries(self) -> Vec<WorkoutEntry> {
        self.entries
    }

    /// Rows left out under [`RowPolicy::SkipAndWarn`]
    #[must_use]
    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Whether the ledger file did not exist or held nothing
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.absent
    }
}

/// Header position of each required column
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    name: usize,
    workout_type: usize,
    duration: usize,
    calories: usize,
    date: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, LedgerError> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (idx, column) in headers.iter().enumerate() {
            positions.entry(column.trim()).or_insert(idx);
        }

        let missing: Vec<String> = HEADER
            .iter()
            .filter(|column| !positions.contains_key(*column))
            .map(|column| (*column).to_owned())
            .collect();

        match (
            positions.get(COL_NAME),
            positions.get(COL_TYPE),
            positions.get(COL_DURATION),
            positions.get(COL_CALORIES),
            positions.get(COL_DATE),
        ) {
            (Some(&name), Some(&workout_type), Some(&duration), Some(&calories), Some(&date)) => {
                Ok(Self {
                    name,
                    workout_type,
                    duration,
                    calories,
                    date,
                })
            }
            _ => Err(LedgerError::SchemaMismatch { missing }),
        }
    }

    fn parse_row(&self, record: &StringRecord, width: usize) -> Result<WorkoutEntry, String> {
        if record.len() != width {
            return Err(format!("expected {width} fields, found {}", record.len()));
        }

        let cell = |idx: usize| record.get(idx).unwrap_or_default();

        Ok(WorkoutEntry {
            name: cell(self.name).to_owned(),
            workout_type: cell(self.workout_type).to_owned(),
            duration_minutes: parse_number(COL_DURATION, cell(self.duration))?,
            calories_burned: parse_number(COL_CALORIES, cell(self.calories))?,
            date: EntryDate::parse(cell(self.date)),
        })
    }

    /// Lay out `entry` in the column order of a file with `width` columns
    fn to_row(self, entry: &WorkoutEntry, width: usize) -> Vec<String> {
        let mut row = vec![String::new(); width];
        row[self.name] = entry.name.clone();
        row[self.workout_type] = entry.workout_type.clone();
        row[self.duration] = entry.duration_minutes.to_string();
        row[self.calories] = entry.calories_burned.to_string();
        row[self.date] = entry.date.to_string();
        row
    }

    const fn canonical() -> Self {
        Self {
            name: 0,
            workout_type: 1,
            duration: 2,
            calories: 3,
            date: 4,
        }
    }
}

fn parse_number(column: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{column} is not a number: {raw:?}"))
}

/// Append-only workout ledger backed by a CSV file
#[derive(Debug, Clone)]
pub struct WorkoutLedger {
    path: PathBuf,
}

impl WorkoutLedger {
    /// Ledger backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ledger at the configured location
    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.ledger_path())
    }

    /// Location of the ledger file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the ledger file exists and holds anything besides whitespace
    #[must_use]
    pub fn exists(&self) -> bool {
        File::open(&self.path)
            .and_then(|mut file| has_content(&mut file))
            .unwrap_or(false)
    }

    /// Append one entry
    ///
    /// Writes the header first when the file is missing or blank. A blank
    /// file is truncated before the header goes in.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::SchemaMismatch`] when the existing header lacks
    /// a required column, and I/O or CSV errors when the file cannot be written.
    pub fn append(&self, entry: &WorkoutEntry) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        let (columns, width, needs_header) = if has_content(&mut file)? {
            let headers = read_headers(&self.path)?;
            let columns = ColumnIndex::resolve(&headers)?;
            let len = file.metadata()?.len();
            if !ends_with_newline(&mut file, len)? {
                file.write_all(b"\n")?;
            }
            (columns, headers.len(), false)
        } else {
            if file.metadata()?.len() > 0 {
                debug!(path = %self.path.display(), "Discarding blank workout ledger");
                file.set_len(0)?;
            }
            (ColumnIndex::canonical(), HEADER.len(), true)
        };

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(HEADER)?;
            debug!(path = %self.path.display(), "Created workout ledger");
        }
        writer.write_record(columns.to_row(entry, width))?;
        writer.flush()?;

        info!(
            path = %self.path.display(),
            workout = %entry.name,
            date = %entry.date,
            "Workout logged"
        );
        Ok(())
    }

    /// Read every entry in append order
    ///
    /// A missing or blank file yields an empty snapshot marked absent.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::SchemaMismatch`] when required columns are
    /// missing, [`LedgerError::MalformedRecord`] for a bad row under
    /// [`RowPolicy::Abort`], and I/O or CSV errors when the file cannot be read.
    pub fn load_all(&self, policy: RowPolicy) -> Result<LedgerSnapshot, LedgerError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No workout ledger yet");
                return Ok(LedgerSnapshot::absent());
            }
            Err(e) => return Err(e.into()),
        };
        if !has_content(&mut file)? {
            debug!(path = %self.path.display(), "Workout ledger is blank");
            return Ok(LedgerSnapshot::absent());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(file);
        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers)?;
        let width = headers.len();

        let mut snapshot = LedgerSnapshot::default();
        for result in reader.records() {
            let parsed = match result {
                Ok(record) => {
                    let line = record.position().map_or(0, csv::Position::line);
                    columns
                        .parse_row(&record, width)
                        .map_err(|reason| SkippedRow { line, reason })
                }
                Err(e) => Err(SkippedRow {
                    line: e.position().map_or(0, csv::Position::line),
                    reason: e.to_string(),
                }),
            };

            match parsed {
                Ok(entry) => snapshot.entries.push(entry),
                Err(row) => match policy {
                    RowPolicy::Abort => {
                        return Err(LedgerError::MalformedRecord {
                            line: row.line,
                            reason: row.reason,
                        });
                    }
                    RowPolicy::SkipAndWarn => {
                        warn!(
                            path = %self.path.display(),
                            line = row.line,
                            reason = %row.reason,
                            "Skipping malformed ledger row"
                        );
                        snapshot.skipped.push(row);
                    }
                },
            }
        }

        debug!(
            entries = snapshot.entries.len(),
            skipped = snapshot.skipped.len(),
            "Workout ledger loaded"
        );
        Ok(snapshot)
    }
}

fn read_headers(path: &Path) -> Result<StringRecord, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_path(path)?;
    Ok(reader.headers()?.clone())
}

/// Whether the file holds any non-whitespace byte; leaves the cursor at the start
fn has_content(file: &mut File) -> io::Result<bool> {
    file.seek(SeekFrom::Start(0))?;
    let mut buf = [0_u8; 4096];
    let found = loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break false;
        }
        if buf[..read].iter().any(|byte| !byte.is_ascii_whitespace()) {
            break true;
        }
    };
    file.seek(SeekFrom::Start(0))?;
    Ok(found)
}

fn ends_with_newline(file: &mut File, len: u64) -> io::Result<bool> {
    let mut last = [0_u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
