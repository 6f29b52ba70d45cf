// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report façade: filter once, then run every builder on the result.

use crate::models::{
    ActivityDistribution, ActivityRecord, DateRange, DistanceCalories, DistanceHistogram,
    MovingTimeSeries, ReportOutcome, Reports,
};
use crate::services::filter::filter_by_date;
use crate::services::reports::{
    activity_distribution, distance_histogram, distance_vs_calories, moving_time_series,
    ReportError, DEFAULT_MAX_BINS,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Tunables for report computation.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub max_histogram_bins: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_histogram_bins: DEFAULT_MAX_BINS,
        }
    }
}

/// The four reports, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Distribution,
    Histogram,
    Scatter,
    MovingTime,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Distribution,
        ReportKind::Histogram,
        ReportKind::Scatter,
        ReportKind::MovingTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Distribution => "distribution",
            ReportKind::Histogram => "histogram",
            ReportKind::Scatter => "scatter",
            ReportKind::MovingTime => "moving-time",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown report: {}", s))
    }
}

/// A single report, as returned by [`build_report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SingleReport {
    Distribution(ReportOutcome<ActivityDistribution>),
    Histogram(ReportOutcome<DistanceHistogram>),
    Scatter(ReportOutcome<DistanceCalories>),
    MovingTime(ReportOutcome<MovingTimeSeries>),
}

/// Build all four reports for `records` restricted to `range`.
///
/// Never fails: a builder error is captured in that report's outcome.
pub fn build_reports(records: &[ActivityRecord], range: &DateRange) -> Reports {
    build_reports_with(records, range, &ReportOptions::default())
}

pub fn build_reports_with(
    records: &[ActivityRecord],
    range: &DateRange,
    options: &ReportOptions,
) -> Reports {
    let filtered = filter_by_date(records, range);
    let subset: &[ActivityRecord] = &filtered.records;

    let reports = Reports {
        range: *range,
        total_records: records.len(),
        filtered_records: subset.len(),
        dropped_by_filter: filtered.dropped,
        distribution: outcome(ReportKind::Distribution, Ok(activity_distribution(subset))),
        histogram: outcome(
            ReportKind::Histogram,
            distance_histogram(subset, options.max_histogram_bins),
        ),
        scatter: outcome(ReportKind::Scatter, Ok(distance_vs_calories(subset))),
        moving_time: outcome(ReportKind::MovingTime, Ok(moving_time_series(subset))),
    };

    tracing::debug!(
        total = reports.total_records,
        filtered = reports.filtered_records,
        dropped_by_filter = reports.dropped_by_filter,
        distribution_dropped = ?reports.distribution.data().map(|d| d.dropped),
        histogram_dropped = ?reports.histogram.data().map(|h| h.dropped),
        scatter_dropped = ?reports.scatter.data().map(|s| s.dropped),
        moving_time_dropped = ?reports.moving_time.data().map(|m| m.dropped),
        "Reports built"
    );

    reports
}

/// Build one report for `records` restricted to `range`.
pub fn build_report(
    records: &[ActivityRecord],
    range: &DateRange,
    kind: ReportKind,
    options: &ReportOptions,
) -> SingleReport {
    let filtered = filter_by_date(records, range);
    let subset: &[ActivityRecord] = &filtered.records;

    match kind {
        ReportKind::Distribution => {
            SingleReport::Distribution(outcome(kind, Ok(activity_distribution(subset))))
        }
        ReportKind::Histogram => SingleReport::Histogram(outcome(
            kind,
            distance_histogram(subset, options.max_histogram_bins),
        )),
        ReportKind::Scatter => {
            SingleReport::Scatter(outcome(kind, Ok(distance_vs_calories(subset))))
        }
        ReportKind::MovingTime => {
            SingleReport::MovingTime(outcome(kind, Ok(moving_time_series(subset))))
        }
    }
}

fn outcome<T>(kind: ReportKind, result: Result<T, ReportError>) -> ReportOutcome<T> {
    match result {
        Ok(data) => ReportOutcome::Ok { data },
        Err(e) => {
            tracing::warn!(report = %kind, error = %e, "Report builder failed");
            ReportOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}
