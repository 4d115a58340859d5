// Metrics endpoint

use crate::core::state::AppState;
use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::metrics::collector::MetricsSnapshot;

/// Returns JSON with request counters, store sizes, uptime, and request
/// rate. Unauthenticated, like the rest of the service.
///
/// GET /metrics
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    let snapshot = state.metrics.get_snapshot(
        &state.user_store,
        &state.driver_store,
        &state.booking_store,
    );

    Json(snapshot)
}
