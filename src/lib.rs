// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Dashboard: report computation over a fitness activity export.
//!
//! This crate loads an activities CSV once, and serves four report
//! artifacts (activity distribution, distance histogram, distance vs.
//! calories, moving-time series) filtered by an optional date range.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::RecordStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: RecordStore,
}
