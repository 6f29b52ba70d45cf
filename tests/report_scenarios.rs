// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end report behaviour over filtered record sets.

use activity_dashboard::models::{ActivityRecord, DateRange, HistogramBin};
use activity_dashboard::services::reports::{
    activity_distribution, distance_histogram, moving_time_series, DEFAULT_MAX_BINS,
};
use activity_dashboard::services::{build_reports, filter_by_date, RecordStore};

mod common;
use common::{day, record};

fn sample_records() -> Vec<ActivityRecord> {
    vec![
        record("2023-03-04", "Running", 12.4, 780.0, "01:05:00"),
        record("2023-01-01", "Running", 5.0, 300.0, "00:30:00"),
        record("2023-02-01", "Cycling", 20.0, 500.0, "01:00:00"),
        record("2023-01-15", "Trail Running", 9.1, 720.0, "01:20:00"),
        record("2023-01-15", "Running", 1.2, 80.0, "00:08:00"),
        record("2022-12-31", "Swimming", 1.5, 400.0, "00:40:00"),
        ActivityRecord {
            date: None,
            activity_type: "Running".to_string(),
            distance: Some(6.0),
            calories: Some(360.0),
            moving_time: Some("00:36:00".to_string()),
        },
        record("2023-02-20", "Trail Running", 15.9, 1300.0, "N/A"),
    ]
}

fn sample_ranges() -> Vec<DateRange> {
    vec![
        DateRange::new(Some(day("2023-01-01")), Some(day("2023-01-31"))),
        DateRange::new(Some(day("2023-01-15")), None),
        DateRange::new(None, Some(day("2023-01-15"))),
        DateRange::new(Some(day("2023-01-15")), Some(day("2023-01-15"))),
        DateRange::new(Some(day("2024-01-01")), Some(day("2024-12-31"))),
    ]
}

#[test]
fn test_single_month_scenario() {
    let records = vec![
        record("2023-01-01", "Running", 5.0, 300.0, "00:30:00"),
        record("2023-02-01", "Cycling", 20.0, 500.0, "01:00:00"),
    ];
    let range = DateRange::new(Some(day("2023-01-01")), Some(day("2023-01-31")));

    let reports = build_reports(&records, &range);

    assert_eq!(reports.filtered_records, 1);

    let distribution = reports.distribution.data().unwrap();
    assert_eq!(distribution.counts.len(), 1);
    assert_eq!(distribution.get("Running"), Some(1));

    let scatter = reports.scatter.data().unwrap();
    let pairs: Vec<(f64, f64)> = scatter.points.iter().map(|p| (p.distance, p.calories)).collect();
    assert_eq!(pairs, vec![(5.0, 300.0)]);

    let series = reports.moving_time.data().unwrap();
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].date, day("2023-01-01"));
    assert_eq!(series.points[0].moving_time_seconds, 1800.0);

    let histogram = reports.histogram.data().unwrap();
    assert_eq!(histogram.series.len(), 1);
    assert_eq!(histogram.percentage_at("Running", 5.0), Some(100.0));
    assert_eq!(
        histogram.bins.last(),
        Some(&HistogramBin {
            start: 4.0,
            end: 6.0
        })
    );
    // Every other bin is empty
    let nonzero = histogram.series[0]
        .percentages
        .iter()
        .filter(|p| **p > 0.0)
        .count();
    assert_eq!(nonzero, 1);
}

#[test]
fn test_empty_input_produces_empty_reports() {
    let reports = build_reports(&[], &DateRange::unbounded());

    assert_eq!(reports.total_records, 0);
    assert!(reports.distribution.data().unwrap().is_empty());
    assert!(reports.histogram.data().unwrap().is_empty());
    assert!(reports.scatter.data().unwrap().points.is_empty());
    assert!(reports.moving_time.data().unwrap().points.is_empty());
}

#[test]
fn test_range_matching_nothing_produces_empty_reports() {
    let range = DateRange::new(Some(day("2030-01-01")), None);

    let reports = build_reports(&sample_records(), &range);

    assert_eq!(reports.filtered_records, 0);
    assert_eq!(reports.dropped_by_filter, 1);
    assert!(reports.distribution.data().unwrap().is_empty());
    assert!(reports.histogram.data().unwrap().is_empty());
}

#[test]
fn test_unparsable_moving_time_only_affects_series() {
    let records = vec![
        record("2023-01-01", "Running", 5.0, 300.0, "N/A"),
        record("2023-01-02", "Running", 7.0, 420.0, "00:42:00"),
    ];

    let reports = build_reports(&records, &DateRange::unbounded());

    assert_eq!(reports.distribution.data().unwrap().get("Running"), Some(2));
    assert_eq!(reports.histogram.data().unwrap().series[0].count, 2);
    assert_eq!(reports.scatter.data().unwrap().points.len(), 2);

    let series = reports.moving_time.data().unwrap();
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].date, day("2023-01-02"));
    assert_eq!(series.dropped, 1);
}

#[test]
fn test_missing_calories_only_affects_scatter() {
    let records = vec![
        record("2023-01-01", "Running", 5.0, 300.0, "00:30:00"),
        ActivityRecord {
            calories: None,
            ..record("2023-01-02", "Running", 7.0, 0.0, "00:42:00")
        },
    ];

    let reports = build_reports(&records, &DateRange::unbounded());

    assert_eq!(reports.distribution.data().unwrap().get("Running"), Some(2));
    assert_eq!(reports.histogram.data().unwrap().series[0].count, 2);

    let series = reports.moving_time.data().unwrap();
    assert_eq!(series.points.len(), 2);
    assert_eq!(series.dropped, 0);

    let scatter = reports.scatter.data().unwrap();
    let pairs: Vec<(f64, f64)> = scatter.points.iter().map(|p| (p.distance, p.calories)).collect();
    assert_eq!(pairs, vec![(5.0, 300.0)]);
    assert_eq!(scatter.dropped, 1);
}

#[test]
fn test_unbounded_filter_is_identity() {
    let records = sample_records();

    let filtered = filter_by_date(&records, &DateRange::unbounded());

    assert_eq!(&*filtered.records, records.as_slice());
}

#[test]
fn test_filter_returns_subset_within_bounds() {
    let records = sample_records();

    for range in sample_ranges() {
        let filtered = filter_by_date(&records, &range);

        for selected in filtered.records.iter() {
            assert!(records.contains(selected));
            let date = selected.date.expect("filtered records have dates");
            assert!(range.contains(date), "{} outside {:?}", date, range);
        }
        let expected = records
            .iter()
            .filter(|r| r.date.is_some_and(|d| range.contains(d)))
            .count();
        assert_eq!(filtered.len(), expected);
    }
}

#[test]
fn test_distribution_counts_sum_to_filtered_len() {
    let records = sample_records();

    for range in sample_ranges() {
        let filtered = filter_by_date(&records, &range);
        let distribution = activity_distribution(&filtered.records);

        assert_eq!(distribution.total(), filtered.len());
        assert!(distribution
            .counts
            .windows(2)
            .all(|w| w[0].count >= w[1].count));
    }
}

#[test]
fn test_histogram_series_sum_to_one_hundred() {
    let records = sample_records();

    for range in sample_ranges() {
        let filtered = filter_by_date(&records, &range);
        let histogram = distance_histogram(&filtered.records, DEFAULT_MAX_BINS).unwrap();

        for series in &histogram.series {
            assert!(series.count > 0);
            assert_eq!(series.percentages.len(), histogram.bins.len());
            let sum: f64 = series.percentages.iter().sum();
            assert!((sum - 100.0).abs() < 1e-9, "{} sums to {}", series.activity_type, sum);
        }
    }
}

#[test]
fn test_moving_time_series_sorted_for_any_order() {
    let mut records = sample_records();

    for _ in 0..records.len() {
        let series = moving_time_series(&records);
        assert!(series.points.windows(2).all(|w| w[0].date <= w[1].date));
        records.rotate_left(1);
    }

    records.reverse();
    let series = moving_time_series(&records);
    assert!(series.points.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn test_reports_over_fixture_export() {
    let store = RecordStore::load(common::FIXTURE_CSV).unwrap();
    let range = DateRange::new(Some(day("2023-01-01")), Some(day("2023-01-31")));

    let reports = build_reports(&store.records(), &range);

    assert_eq!(reports.total_records, 6);
    assert_eq!(reports.filtered_records, 4);
    assert_eq!(reports.dropped_by_filter, 1);

    let distribution = reports.distribution.data().unwrap();
    let order: Vec<&str> = distribution
        .counts
        .iter()
        .map(|c| c.activity_type.as_str())
        .collect();
    assert_eq!(order, vec!["Running", "Trail Running", "Strength Training"]);

    let series = reports.moving_time.data().unwrap();
    let seconds: Vec<f64> = series.points.iter().map(|p| p.moving_time_seconds).collect();
    assert_eq!(seconds, vec![1800.0, 6312.0]);
    assert_eq!(series.dropped, 1);
}
