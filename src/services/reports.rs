// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report builders.
//!
//! Each builder is a pure function over an already-filtered record slice.
//! Rows missing a field a builder needs are skipped and counted in the
//! artifact's `dropped` field.

use crate::models::{
    ActivityDistribution, ActivityRecord, CategoryCount, DistanceCalories, DistanceCaloriesPoint,
    DistanceHistogram, HistogramBin, HistogramSeries, MovingTimePoint, MovingTimeSeries,
};
use crate::time_utils::parse_moving_time;
use std::collections::HashMap;

/// Histogram bin width in kilometers.
pub const HISTOGRAM_BIN_WIDTH: f64 = 2.0;

/// Default cap on the number of histogram bins.
pub const DEFAULT_MAX_BINS: usize = 10_000;

/// Errors a builder can report without affecting the others.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error("Maximum distance {max_distance} km needs more than {limit} histogram bins")]
    TooManyBins { max_distance: f64, limit: usize },
}

// ─── Activity Distribution ───────────────────────────────────

/// Count records per activity type, largest group first.
///
/// Ties keep first-seen order. Records with a blank type are not counted.
pub fn activity_distribution(records: &[ActivityRecord]) -> ActivityDistribution {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut dropped = 0;

    for record in records {
        let activity_type = record.label();
        if activity_type.is_empty() {
            dropped += 1;
            continue;
        }

        let slot = *index.entry(activity_type).or_insert_with(|| {
            counts.push(CategoryCount {
                activity_type: activity_type.to_string(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));

    ActivityDistribution { counts, dropped }
}

// ─── Distance Histogram ──────────────────────────────────────

/// Bin running distances into 2 km bins starting at 0.
///
/// Each activity type's bins are expressed as a percentage of that type's
/// records, so every series sums to 100.
pub fn distance_histogram(
    records: &[ActivityRecord],
    max_bins: usize,
) -> Result<DistanceHistogram, ReportError> {
    let mut dropped = 0;
    let mut samples: Vec<(&str, f64)> = Vec::new();

    for record in records.iter().filter(|r| r.is_running()) {
        match record.distance {
            Some(d) if d.is_finite() && d >= 0.0 => {
                samples.push((record.label(), d));
            }
            _ => dropped += 1,
        }
    }

    if samples.is_empty() {
        return Ok(DistanceHistogram {
            bin_width: HISTOGRAM_BIN_WIDTH,
            dropped,
            ..Default::default()
        });
    }

    let max_distance = samples.iter().map(|(_, d)| *d).fold(0.0, f64::max);
    let last_bin = (max_distance / HISTOGRAM_BIN_WIDTH).floor();
    if last_bin >= max_bins as f64 {
        return Err(ReportError::TooManyBins {
            max_distance,
            limit: max_bins,
        });
    }
    let bin_count = last_bin as usize + 1;

    let bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            start: i as f64 * HISTOGRAM_BIN_WIDTH,
            end: (i + 1) as f64 * HISTOGRAM_BIN_WIDTH,
        })
        .collect();

    let mut tallies: Vec<(&str, Vec<usize>)> = Vec::new();
    for (activity_type, distance) in &samples {
        let bin = ((distance / HISTOGRAM_BIN_WIDTH).floor() as usize).min(bin_count - 1);
        let slot = match tallies.iter().position(|(t, _)| t == activity_type) {
            Some(slot) => slot,
            None => {
                tallies.push((*activity_type, vec![0; bin_count]));
                tallies.len() - 1
            }
        };
        tallies[slot].1[bin] += 1;
    }

    let series = tallies
        .into_iter()
        .map(|(activity_type, counts)| {
            let total: usize = counts.iter().sum();
            let percentages = counts
                .iter()
                .map(|c| 100.0 * *c as f64 / total as f64)
                .collect();
            HistogramSeries {
                activity_type: activity_type.to_string(),
                count: total,
                percentages,
            }
        })
        .collect();

    Ok(DistanceHistogram {
        bin_width: HISTOGRAM_BIN_WIDTH,
        bins,
        series,
        dropped,
    })
}

// ─── Distance vs. Calories ───────────────────────────────────

/// Pair distance with calories for each running record, in record order.
pub fn distance_vs_calories(records: &[ActivityRecord]) -> DistanceCalories {
    let mut dropped = 0;
    let points = records
        .iter()
        .filter(|r| r.is_running())
        .filter_map(|r| match (r.distance, r.calories) {
            (Some(distance), Some(calories)) => Some(DistanceCaloriesPoint { distance, calories }),
            _ => {
                dropped += 1;
                None
            }
        })
        .collect();

    DistanceCalories { points, dropped }
}

// ─── Moving-Time Series ──────────────────────────────────────

/// Moving time in seconds per running record, sorted ascending by date.
pub fn moving_time_series(records: &[ActivityRecord]) -> MovingTimeSeries {
    let mut dropped = 0;
    let mut points: Vec<MovingTimePoint> = records
        .iter()
        .filter(|r| r.is_running())
        .filter_map(|r| {
            let seconds = r.moving_time.as_deref().and_then(parse_moving_time);
            match (r.date, seconds) {
                (Some(date), Some(moving_time_seconds)) => Some(MovingTimePoint {
                    date,
                    moving_time_seconds,
                }),
                _ => {
                    dropped += 1;
                    None
                }
            }
        })
        .collect();

    points.sort_by_key(|p| p.date);

    MovingTimeSeries { points, dropped }
}
