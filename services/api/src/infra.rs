use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wraps a CSV artifact as a downloadable attachment.
pub(crate) fn csv_attachment(filename: &str, body: String) -> Response {
    let content_type = mime_guess::from_path(filename).first_or_octet_stream();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.as_ref().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
