//! HTTP ingest handler: `/<kind>/<metric>` with the value in the body.
//!
//! Order per request:
//! 1. route segment -> emitter (404 if unknown)
//! 2. metric name from segment 2, lexical check (400)
//! 3. whitelist gate (401)
//! 4. body read (500)
//! 5. parse + emit (500 with the error message)
//!
//! Any HTTP method is accepted.

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use metricgate_core::error::{ClientCode, MetricGateError, Result};
use metricgate_core::protocol::MetricKind;

use crate::app_state::AppState;
use crate::policy;

use super::emitter::Emitter;

/// Metric name is the third `/`-separated segment: `["", kind, name, ..]`.
pub fn extract_metric(path: &str) -> Result<&str> {
    path.split('/').nth(2).ok_or(MetricGateError::NoMetric)
}

pub async fn ingest(State(state): State<AppState>, req: Request) -> Response {
    let route = req.uri().path().split('/').nth(1).unwrap_or_default();
    let Some(kind) = state.emitters().lookup(route) else {
        return (StatusCode::NOT_FOUND, "404 page not found").into_response();
    };

    let path = req.uri().path().to_owned();
    match forward(&state, kind, &path, req.into_body()).await {
        Ok(()) => {
            state.metrics().record(kind.route(), "ok");
            (StatusCode::OK, "OK").into_response()
        }
        Err(e) => {
            state.metrics().record(kind.route(), outcome(&e));
            error_response(&e)
        }
    }
}

async fn forward(state: &AppState, kind: MetricKind, path: &str, body: Body) -> Result<()> {
    let name = extract_metric(path)?;
    if !state.names().is_valid(name) {
        tracing::debug!(%kind, metric = %name, "invalid metric name");
        return Err(MetricGateError::InvalidMetricName(name.to_string()));
    }

    if !policy::is_allowed(name, state.whitelist()) {
        tracing::debug!(%kind, metric = %name, "metric not whitelisted");
        return Err(MetricGateError::NotWhitelisted(name.to_string()));
    }

    let bytes: Bytes = axum::body::to_bytes(body, state.cfg().max_body_bytes)
        .await
        .map_err(|e| MetricGateError::BodyRead(e.to_string()))?;

    let value = kind.parse(&bytes).map_err(|e| {
        tracing::warn!(%kind, metric = %name, error = %e, "body rejected");
        e
    })?;

    kind.emit(state.client(), name, &value, state.tags())
        .map_err(|e| {
            tracing::warn!(%kind, metric = %name, error = %e, "statsd send failed");
            e
        })?;

    tracing::debug!(%kind, metric = %name, %value, "forwarded");
    Ok(())
}

fn outcome(e: &MetricGateError) -> &'static str {
    match e.client_code() {
        ClientCode::BadRequest => "invalid_name",
        ClientCode::NotWhitelisted => "not_whitelisted",
        ClientCode::BodyRead => "body_error",
        ClientCode::Parse => "parse_error",
        ClientCode::Transport | ClientCode::Config | ClientCode::Internal => "send_error",
    }
}

/// Map an error to the plain-text response clients expect.
pub fn error_response(e: &MetricGateError) -> Response {
    match e.client_code() {
        ClientCode::BadRequest => (StatusCode::BAD_REQUEST, "Invalid metric name").into_response(),
        ClientCode::NotWhitelisted => {
            (StatusCode::UNAUTHORIZED, "Metric is not whitelisted").into_response()
        }
        ClientCode::BodyRead => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not read body").into_response()
        }
        ClientCode::Parse | ClientCode::Transport | ClientCode::Config | ClientCode::Internal => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("ERROR: {e}")).into_response()
        }
    }
}
