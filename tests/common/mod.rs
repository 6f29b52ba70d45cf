// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_dashboard::config::Config;
use activity_dashboard::models::ActivityRecord;
use activity_dashboard::routes::create_router;
use activity_dashboard::services::RecordStore;
use activity_dashboard::AppState;
use chrono::NaiveDate;
use std::io::Write;
use std::sync::Arc;

/// Path of the checked-in sample export.
#[allow(dead_code)]
pub const FIXTURE_CSV: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/activities.csv");

/// Parse a `YYYY-MM-DD` literal.
#[allow(dead_code)]
pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Build a record with every field populated.
#[allow(dead_code)]
pub fn record(
    date: &str,
    activity_type: &str,
    distance: f64,
    calories: f64,
    moving_time: &str,
) -> ActivityRecord {
    ActivityRecord {
        date: Some(day(date)),
        activity_type: activity_type.to_string(),
        distance: Some(distance),
        calories: Some(calories),
        moving_time: Some(moving_time.to_string()),
    }
}

/// Write CSV contents to a temporary file.
#[allow(dead_code)]
pub fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Create a test app serving the given store.
#[allow(dead_code)]
pub fn create_test_app(store: RecordStore) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        store,
    });

    (create_router(state.clone()), state)
}

/// Create a test app backed by the sample export.
#[allow(dead_code)]
pub fn create_fixture_app() -> (axum::Router, Arc<AppState>) {
    let store = RecordStore::load(FIXTURE_CSV).expect("Failed to load fixture");
    create_test_app(store)
}
