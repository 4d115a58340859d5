// Application state (AppState)

use crate::core::config::Config;
use crate::metrics::collector::Metrics;
use crate::stores::{
    booking_store::BookingStore, driver_store::DriverStore, user_store::UserStore,
};
use std::sync::Arc;

/// Shared application state
///
/// Holds the three in-memory stores, the request metrics, and the
/// configuration. Constructed once at startup; everything in it is volatile,
/// so a restart resets all records and id generators.
#[derive(Clone)]
pub struct AppState {
    /// Registered users, keyed by username
    pub user_store: Arc<UserStore>,

    /// Drivers, keyed by assigned id
    pub driver_store: Arc<DriverStore>,

    /// Ride bookings, keyed by assigned id
    pub booking_store: Arc<BookingStore>,

    /// Request counters
    pub metrics: Arc<Metrics>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            user_store: Arc::new(UserStore::new()),
            driver_store: Arc::new(DriverStore::new()),
            booking_store: Arc::new(BookingStore::new()),
            metrics: Arc::new(Metrics::new()),
            config: Arc::new(config),
        }
    }
}
