use crate::core::state::AppState;
use crate::models::admin::SummaryResponse;
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// Store cardinalities in one keyed result
///
/// GET /api/admin/summary
pub async fn summary_handler(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    state.metrics.increment_requests();

    Json(SummaryResponse {
        users: state.user_store.len(),
        drivers: state.driver_store.len(),
        bookings: state.booking_store.len(),
    })
}
