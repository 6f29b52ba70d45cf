// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report API routes.

use crate::error::{AppError, Result};
use crate::models::{DateRange, Reports};
use crate::services::facade::SingleReport;
use crate::services::{build_report, build_reports_with, ReportKind};
use crate::time_utils::{format_utc_rfc3339, parse_iso_date};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Report routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/reports", get(get_reports))
        .route("/api/reports/{name}", get(get_report))
        .route("/api/reload", post(reload))
}

// ─── Date Range ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    /// Inclusive start date (YYYY-MM-DD)
    start: Option<String>,
    /// Inclusive end date (YYYY-MM-DD)
    end: Option<String>,
}

fn parse_bound(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            parse_iso_date(s).ok_or_else(|| {
                AppError::BadRequest(format!("Invalid '{}' parameter: must be YYYY-MM-DD", name))
            })
        })
        .transpose()
}

fn parse_range(query: &RangeQuery) -> Result<DateRange> {
    let start = parse_bound("start", query.start.as_deref())?;
    let end = parse_bound("end", query.end.as_deref())?;

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(AppError::BadRequest(
                "'start' must not be after 'end'".to_string(),
            ));
        }
    }

    Ok(DateRange::new(start, end))
}

// ─── Reports ─────────────────────────────────────────────────

/// All four reports for the requested range.
async fn get_reports(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<Reports>> {
    let range = parse_range(&params)?;
    tracing::debug!(start = ?range.start, end = ?range.end, "Building reports");

    let records = state.store.records();
    let options = state.config.report_options();
    let reports =
        tokio::task::spawn_blocking(move || build_reports_with(&records, &range, &options))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Report task failed: {}", e)))?;

    Ok(Json(reports))
}

/// One report by name.
async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<SingleReport>> {
    let kind: ReportKind = name.parse().map_err(AppError::NotFound)?;
    let range = parse_range(&params)?;
    tracing::debug!(report = %kind, start = ?range.start, end = ?range.end, "Building report");

    let records = state.store.records();
    let options = state.config.report_options();
    let report =
        tokio::task::spawn_blocking(move || build_report(&records, &range, kind, &options))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Report task failed: {}", e)))?;

    Ok(Json(report))
}

// ─── Reload ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub records: usize,
    pub loaded_at: String,
}

/// Re-read the data source. The previous records stay live if this fails.
async fn reload(State(state): State<Arc<AppState>>) -> Result<Json<ReloadResponse>> {
    let reloaded = tokio::task::spawn_blocking(move || state.store.reload())
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Reload task failed: {}", e)))??;

    Ok(Json(ReloadResponse {
        records: reloaded.count,
        loaded_at: format_utc_rfc3339(reloaded.loaded_at),
    }))
}
