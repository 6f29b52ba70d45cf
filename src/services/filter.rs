// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Date range selection over activity records.

use crate::models::{ActivityRecord, DateRange};
use std::borrow::Cow;

/// Records selected by a date range, in their original order.
#[derive(Debug, Clone)]
pub struct FilteredRecords<'a> {
    pub records: Cow<'a, [ActivityRecord]>,
    /// Records removed because their date could not be parsed
    pub dropped: usize,
}

impl FilteredRecords<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Select the records whose date lies within `range`.
///
/// An unbounded range returns the input as-is. Otherwise a record is kept
/// only if it has a date and that date satisfies every supplied bound.
pub fn filter_by_date<'a>(records: &'a [ActivityRecord], range: &DateRange) -> FilteredRecords<'a> {
    if range.is_unbounded() {
        return FilteredRecords {
            records: Cow::Borrowed(records),
            dropped: 0,
        };
    }

    let mut dropped = 0;
    let selected: Vec<ActivityRecord> = records
        .iter()
        .filter(|record| match record.date {
            Some(date) => range.contains(date),
            None => {
                dropped += 1;
                false
            }
        })
        .cloned()
        .collect();

    FilteredRecords {
        records: Cow::Owned(selected),
        dropped,
    }
}
