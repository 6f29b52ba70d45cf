// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod record;
pub mod report;

pub use record::{ActivityRecord, DateRange, RUNNING_TYPES};
pub use report::{
    ActivityDistribution, CategoryCount, DistanceCalories, DistanceCaloriesPoint,
    DistanceHistogram, HistogramBin, HistogramSeries, MovingTimePoint, MovingTimeSeries,
    ReportOutcome, Reports,
};
