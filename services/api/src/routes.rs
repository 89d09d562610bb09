use crate::infra::{csv_attachment, AppState};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use dsu_report::error::AppError;
use dsu_report::report::export::{
    raw_csv, summary_csv, RAW_EXPORT_FILENAME, SUMMARY_EXPORT_FILENAME,
};
use dsu_report::report::ingest::ActivityCsvImporter;
use dsu_report::report::views::{DialsRowView, DsuSummary, ReportTotals};
use dsu_report::report::{ReportEngine, ReportOutcome};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

/// One upload batch: each entry is the contents of one activity CSV export.
#[derive(Debug, Deserialize)]
pub(crate) struct DsuReportRequest {
    #[serde(default)]
    pub(crate) activity_csv: Vec<String>,
    #[serde(default)]
    pub(crate) include_dials: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct DsuReportResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<DsuSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) totals: Option<ReportTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) dials: Option<Vec<DialsRowView>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ReportStatus {
    Ok,
    NoData,
}

pub(crate) fn with_report_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/dsu/report", axum::routing::post(dsu_report_endpoint))
        .route(
            "/api/v1/dsu/export/raw",
            axum::routing::post(raw_export_endpoint),
        )
        .route(
            "/api/v1/dsu/export/summary",
            axum::routing::post(summary_export_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn run_report(activity_csv: &[String]) -> Result<ReportOutcome, AppError> {
    let tables = ActivityCsvImporter::from_readers(
        activity_csv.iter().map(|file| Cursor::new(file.as_bytes())),
    )?;
    Ok(ReportEngine::standard().build(tables))
}

pub(crate) async fn dsu_report_endpoint(
    Json(payload): Json<DsuReportRequest>,
) -> Result<Json<DsuReportResponse>, AppError> {
    let DsuReportRequest {
        activity_csv,
        include_dials,
    } = payload;

    let outcome = run_report(&activity_csv)?;
    let generated_at = Utc::now();

    let response = match outcome {
        ReportOutcome::NoData => DsuReportResponse {
            generated_at,
            status: ReportStatus::NoData,
            summary: None,
            totals: None,
            dials: None,
        },
        ReportOutcome::Ready(report) => {
            let dials = include_dials.then(|| report.dials_rows());
            DsuReportResponse {
                generated_at,
                status: ReportStatus::Ok,
                summary: Some(report.summary),
                totals: Some(report.totals()),
                dials,
            }
        }
    };

    Ok(Json(response))
}

pub(crate) async fn raw_export_endpoint(
    Json(payload): Json<DsuReportRequest>,
) -> Result<Response, AppError> {
    match run_report(&payload.activity_csv)? {
        ReportOutcome::NoData => Ok(StatusCode::NO_CONTENT.into_response()),
        ReportOutcome::Ready(report) => {
            let body = raw_csv(&report.dials)?;
            Ok(csv_attachment(RAW_EXPORT_FILENAME, body))
        }
    }
}

pub(crate) async fn summary_export_endpoint(
    Json(payload): Json<DsuReportRequest>,
) -> Result<Response, AppError> {
    match run_report(&payload.activity_csv)? {
        ReportOutcome::NoData => Ok(StatusCode::NO_CONTENT.into_response()),
        ReportOutcome::Ready(report) => {
            let body = summary_csv(&report.summary)?;
            Ok(csv_attachment(SUMMARY_EXPORT_FILENAME, body))
        }
    }
}
