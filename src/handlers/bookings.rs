use crate::core::error::BookingError;
use crate::core::state::AppState;
use crate::models::booking::Booking;
use crate::validation::requests::BookingRequest;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Book a ride
///
/// POST /api/bookings
///
/// The username must belong to a registered user. Both validation and the
/// user check run before an id is drawn, so a rejected request never
/// consumes one. Any caller-supplied status is ignored.
pub async fn booking_create_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Response, BookingError> {
    state.metrics.increment_requests();

    let new_booking = request.validate().map_err(|e| {
        warn!(error = %e, "Booking rejected");
        state.metrics.increment_failed();
        BookingError::from(e)
    })?;

    if !state.user_store.contains(&new_booking.username) {
        warn!(username = %new_booking.username, "Booking for unregistered user");
        state.metrics.increment_failed();
        return Err(BookingError::UnknownUser(new_booking.username));
    }

    let booking = state.booking_store.add(new_booking);

    info!(
        booking_id = booking.id,
        username = %booking.username,
        pickup = %booking.pickup,
        dropoff = %booking.dropoff,
        "Ride booked"
    );

    Ok((StatusCode::OK, Json(booking)).into_response())
}

/// List a user's bookings, oldest first
///
/// GET /api/bookings/{username}
///
/// A username with no bookings (registered or not) yields an empty list,
/// never an error.
pub async fn booking_list_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Json<Vec<Booking>> {
    state.metrics.increment_requests();
    Json(state.booking_store.for_user(&username))
}

/// GET /api/bookings/count
pub async fn booking_count_handler(State(state): State<Arc<AppState>>) -> Json<usize> {
    state.metrics.increment_requests();
    Json(state.booking_store.len())
}
