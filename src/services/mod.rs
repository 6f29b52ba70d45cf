// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - data loading and report computation.

pub mod facade;
pub mod filter;
pub mod reports;
pub mod store;

pub use facade::{build_report, build_reports, build_reports_with, ReportKind, ReportOptions};
pub use filter::{filter_by_date, FilteredRecords};
pub use reports::ReportError;
pub use store::{DataLoadError, RecordStore, Reloaded};
