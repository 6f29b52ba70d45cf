// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity record model and date range selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Activity types that feed the running-only reports.
pub const RUNNING_TYPES: [&str; 2] = ["Running", "Trail Running"];

/// One row of the activities export.
///
/// Fields that failed to parse at load time are `None`; the row itself is
/// kept so that reports not needing the field still see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Calendar date of the activity (time of day discarded)
    pub date: Option<NaiveDate>,
    /// Category label ("Running", "Cycling", ...)
    pub activity_type: String,
    /// Distance in kilometers
    pub distance: Option<f64>,
    /// Calories burned
    pub calories: Option<f64>,
    /// Raw moving time string, parsed on demand
    pub moving_time: Option<String>,
}

impl ActivityRecord {
    /// Activity type with surrounding whitespace removed. Reports group by this.
    pub fn label(&self) -> &str {
        self.activity_type.trim()
    }

    /// Whether this record belongs to one of the running activity types.
    pub fn is_running(&self) -> bool {
        RUNNING_TYPES.contains(&self.label())
    }
}

/// Inclusive date range. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// A range with neither bound; filtering with it is the identity.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Check whether a date falls inside the range (bounds inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}
