// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // User endpoints
        .route("/api/register", post(crate::handlers::users::register_handler))
        .route("/api/login", post(crate::handlers::users::login_handler))
        .route("/api/profile/{username}", put(crate::handlers::users::profile_update_handler))
        .route("/api/users/count", get(crate::handlers::users::user_count_handler))

        // Driver endpoints
        .route("/api/drivers", post(crate::handlers::drivers::driver_add_handler))
        .route("/api/drivers/count", get(crate::handlers::drivers::driver_count_handler))

        // Booking endpoints (the static /count route wins over the capture)
        .route("/api/bookings", post(crate::handlers::bookings::booking_create_handler))
        .route("/api/bookings/count", get(crate::handlers::bookings::booking_count_handler))
        .route("/api/bookings/{username}", get(crate::handlers::bookings::booking_list_handler))

        // Admin endpoints
        .route("/api/admin/summary", get(crate::handlers::admin::summary_handler))

        // Infrastructure endpoints
        .route("/health", get(crate::handlers::health::health_handler))
        .route("/metrics", get(crate::handlers::metrics::metrics_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        // The browser dashboard is served from another origin
        .layer(CorsLayer::permissive())

        .with_state(state)
}
