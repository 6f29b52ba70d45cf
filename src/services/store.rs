// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record store: loads the activities CSV and holds it for the process lifetime.
//!
//! The loaded collection is immutable. A reload builds a fresh collection
//! and swaps it in only once the whole file parsed successfully.

use crate::models::ActivityRecord;
use crate::time_utils::{parse_date, parse_quantity};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Column headers the source must provide.
pub mod columns {
    pub const DATE: &str = "Date";
    pub const ACTIVITY_TYPE: &str = "Activity Type";
    pub const DISTANCE: &str = "Distance";
    pub const CALORIES: &str = "Calories";
    pub const MOVING_TIME: &str = "Moving Time";

    pub const REQUIRED: [&str; 5] = [DATE, ACTIVITY_TYPE, DISTANCE, CALORIES, MOVING_TIME];
}

/// Outcome of a successful [`RecordStore::reload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reloaded {
    pub count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Owns the canonical record collection.
pub struct RecordStore {
    source: Option<PathBuf>,
    current: RwLock<Snapshot>,
}

#[derive(Clone)]
struct Snapshot {
    records: Arc<[ActivityRecord]>,
    loaded_at: DateTime<Utc>,
}

impl Snapshot {
    fn new(records: Vec<ActivityRecord>) -> Self {
        Self {
            records: records.into(),
            loaded_at: Utc::now(),
        }
    }
}

impl RecordStore {
    /// Load records from a CSV file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        let path = path.as_ref().to_path_buf();
        let records = load_records(&path)?;
        Ok(Self {
            source: Some(path),
            current: RwLock::new(Snapshot::new(records)),
        })
    }

    /// Wrap an in-memory collection. Such a store has no source to reload from.
    pub fn from_records(records: Vec<ActivityRecord>) -> Self {
        Self {
            source: None,
            current: RwLock::new(Snapshot::new(records)),
        }
    }

    /// Current record collection. Cheap to clone and safe to hold across a reload.
    pub fn records(&self) -> Arc<[ActivityRecord]> {
        self.snapshot().records
    }

    pub fn len(&self) -> usize {
        self.snapshot().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// When the current collection was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.snapshot().loaded_at
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Re-read the source and replace the collection.
    ///
    /// On failure the previous collection stays in place. The returned
    /// summary describes the snapshot this call installed.
    pub fn reload(&self) -> Result<Reloaded, DataLoadError> {
        let path = self.source.as_ref().ok_or(DataLoadError::NoSource)?;
        let records = load_records(path)?;

        let snapshot = Snapshot::new(records);
        let reloaded = Reloaded {
            count: snapshot.records.len(),
            loaded_at: snapshot.loaded_at,
        };
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = snapshot;

        tracing::info!(path = %path.display(), count = reloaded.count, "Records reloaded");
        Ok(reloaded)
    }

    fn snapshot(&self) -> Snapshot {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Read and parse a CSV file of activity records.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<ActivityRecord>, DataLoadError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Loading activity records");

    let file = File::open(path).map_err(|e| DataLoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_records(file)
}

/// Parse activity records from any CSV reader.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<ActivityRecord>, DataLoadError> {
    // Short rows are accepted; their missing trailing cells read as empty
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| DataLoadError::Csv(e.to_string()))?
        .clone();

    let index_of = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataLoadError::MissingColumn(name))
    };
    let date_idx = index_of(columns::DATE)?;
    let type_idx = index_of(columns::ACTIVITY_TYPE)?;
    let distance_idx = index_of(columns::DISTANCE)?;
    let calories_idx = index_of(columns::CALORIES)?;
    let moving_time_idx = index_of(columns::MOVING_TIME)?;

    let mut records = Vec::new();
    let mut undated = 0usize;

    for row in rdr.records() {
        let row = row.map_err(|e| DataLoadError::Csv(e.to_string()))?;
        if row.len() > headers.len() {
            let line = row.position().map_or(0, |p| p.line());
            return Err(DataLoadError::Csv(format!(
                "record on line {} has {} fields, but the header has {}",
                line,
                row.len(),
                headers.len()
            )));
        }
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let date = parse_date(cell(date_idx));
        if date.is_none() {
            undated += 1;
        }

        let moving_time = Some(cell(moving_time_idx))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        records.push(ActivityRecord {
            date,
            activity_type: cell(type_idx).to_string(),
            distance: parse_quantity(cell(distance_idx)),
            calories: parse_quantity(cell(calories_idx)),
            moving_time,
        });
    }

    if undated > 0 {
        tracing::warn!(undated, "Records with unparsable dates");
    }
    tracing::info!(count = records.len(), "Parsed activity records");
    Ok(records)
}

/// Errors from loading the record source.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse CSV: {0}")]
    Csv(String),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Record store has no source to reload from")]
    NoSource,
}
