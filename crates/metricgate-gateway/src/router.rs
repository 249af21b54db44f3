//! Axum router wiring.
//!
//! Ops endpoints are explicit routes; everything else falls through to the
//! ingest handler, which resolves `/<kind>/` against the emitter table.

use axum::{routing::get, Router};

use crate::{app_state::AppState, dispatch, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .fallback(dispatch::ingest)
        .with_state(state)
}
