// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report artifacts handed to the presentation layer.
//!
//! These are structured summaries, not renderings: the frontend turns them
//! into a pie chart, histogram, scatter plot and line chart.

use crate::models::DateRange;
use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

// ─── Activity Distribution ───────────────────────────────────

/// Record count per activity type, largest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityDistribution {
    pub counts: Vec<CategoryCount>,
    /// Records without a usable activity type
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryCount {
    pub activity_type: String,
    pub count: usize,
}

impl ActivityDistribution {
    /// Count for a single activity type, if present.
    pub fn get(&self, activity_type: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.activity_type == activity_type)
            .map(|c| c.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

// ─── Distance Histogram ──────────────────────────────────────

/// Distance distribution for running activities, normalized per type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DistanceHistogram {
    /// Bin width in kilometers
    pub bin_width: f64,
    pub bins: Vec<HistogramBin>,
    /// One series per activity type, in first-seen order
    pub series: Vec<HistogramSeries>,
    /// Running records without a usable distance
    pub dropped: usize,
}

/// Half-open interval `[start, end)` in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
}

impl HistogramBin {
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.start && distance < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HistogramSeries {
    pub activity_type: String,
    /// Number of records of this type that were binned
    pub count: usize,
    /// Percentage of this type's records per bin, aligned with `bins`
    pub percentages: Vec<f64>,
}

impl DistanceHistogram {
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Percentage of `activity_type` records that fall in the bin containing `distance`.
    pub fn percentage_at(&self, activity_type: &str, distance: f64) -> Option<f64> {
        let index = self.bins.iter().position(|b| b.contains(distance))?;
        self.series
            .iter()
            .find(|s| s.activity_type == activity_type)
            .and_then(|s| s.percentages.get(index).copied())
    }
}

// ─── Distance vs. Calories ───────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DistanceCalories {
    /// One point per qualifying record, in record order
    pub points: Vec<DistanceCaloriesPoint>,
    /// Running records missing distance or calories
    pub dropped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DistanceCaloriesPoint {
    pub distance: f64,
    pub calories: f64,
}

// ─── Moving-Time Series ──────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MovingTimeSeries {
    /// Points sorted ascending by date
    pub points: Vec<MovingTimePoint>,
    /// Running records with an unparsable moving time or no date
    pub dropped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MovingTimePoint {
    pub date: NaiveDate,
    pub moving_time_seconds: f64,
}

// ─── Combined Result ─────────────────────────────────────────

/// Result of one report builder. A failed builder does not affect the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome<T> {
    Ok { data: T },
    Failed { error: String },
}

impl<T> ReportOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ReportOutcome::Ok { .. })
    }

    /// Borrow the artifact if the builder succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            ReportOutcome::Ok { data } => Some(data),
            ReportOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ReportOutcome::Ok { .. } => None,
            ReportOutcome::Failed { error } => Some(error),
        }
    }
}

/// All four reports for one date-range query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Reports {
    pub range: DateRange,
    /// Records in the store before filtering
    pub total_records: usize,
    /// Records left after the date filter
    pub filtered_records: usize,
    /// Records removed by the filter because their date was unparsable
    pub dropped_by_filter: usize,
    pub distribution: ReportOutcome<ActivityDistribution>,
    pub histogram: ReportOutcome<DistanceHistogram>,
    pub scatter: ReportOutcome<DistanceCalories>,
    pub moving_time: ReportOutcome<MovingTimeSeries>,
}
