use crate::stores::booking_store::BookingStore;
use crate::stores::driver_store::DriverStore;
use crate::stores::user_store::UserStore;
use crate::utils::time::current_timestamp;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub total_requests: AtomicU64,
    pub failed_requests: AtomicU64,
    pub start_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub failed_requests: u64,
    pub success_rate: f64,
    pub users: usize,
    pub drivers: usize,
    pub bookings: usize,
    pub uptime_seconds: i64,
    pub requests_per_second: f64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            total_requests: AtomicU64::new(0),
            failed_requests: AtomicU64::new(0),
            start_time: current_timestamp(),
        }
    }

    pub fn increment_requests(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failed(&self) {
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Combine the counters with store cardinalities and derived values
    /// (success_rate, requests_per_second, uptime_seconds).
    pub fn get_snapshot(
        &self,
        user_store: &UserStore,
        driver_store: &DriverStore,
        booking_store: &BookingStore,
    ) -> MetricsSnapshot {
        let current_time = current_timestamp();

        let total_requests = self.total_requests.load(Ordering::Relaxed);
        let failed_requests = self.failed_requests.load(Ordering::Relaxed);

        let success_rate = if total_requests > 0 {
            ((total_requests - failed_requests) as f64 / total_requests as f64) * 100.0
        } else {
            0.0
        };

        let uptime_seconds = current_time - self.start_time;

        let requests_per_second = if uptime_seconds > 0 {
            total_requests as f64 / uptime_seconds as f64
        } else {
            0.0
        };

        MetricsSnapshot {
            total_requests,
            failed_requests,
            success_rate,
            users: user_store.len(),
            drivers: driver_store.len(),
            bookings: booking_store.len(),
            uptime_seconds,
            requests_per_second,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;

    #[test]
    fn test_new_metrics() {
        let metrics = Metrics::new();

        assert_eq!(metrics.total_requests.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.failed_requests.load(Ordering::Relaxed), 0);
        assert!(metrics.start_time > 0);
    }

    #[test]
    fn test_increment_requests() {
        let metrics = Metrics::new();

        metrics.increment_requests();
        metrics.increment_requests();

        assert_eq!(metrics.total_requests.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_get_snapshot_empty() {
        let metrics = Metrics::new();
        let users = UserStore::new();
        let drivers = DriverStore::new();
        let bookings = BookingStore::new();

        let snapshot = metrics.get_snapshot(&users, &drivers, &bookings);

        assert_eq!(snapshot.total_requests, 0);
        assert_eq!(snapshot.failed_requests, 0);
        assert_eq!(snapshot.success_rate, 0.0);
        assert_eq!(snapshot.users, 0);
        assert_eq!(snapshot.drivers, 0);
        assert_eq!(snapshot.bookings, 0);
        assert!(snapshot.uptime_seconds >= 0);
        assert_eq!(snapshot.requests_per_second, 0.0);
    }

    #[test]
    fn test_success_rate_calculation() {
        let metrics = Metrics::new();
        let users = UserStore::new();
        let drivers = DriverStore::new();
        let bookings = BookingStore::new();

        // 8 successful out of 10 total = 80%
        for _ in 0..10 {
            metrics.increment_requests();
        }
        for _ in 0..2 {
            metrics.increment_failed();
        }

        let snapshot = metrics.get_snapshot(&users, &drivers, &bookings);
        assert_eq!(snapshot.success_rate, 80.0);
    }

    #[test]
    fn test_snapshot_includes_store_sizes() {
        let metrics = Metrics::new();
        let users = UserStore::new();
        let drivers = DriverStore::new();
        let bookings = BookingStore::new();

        users.register(User::new(
            "alice".to_string(),
            "pw1".to_string(),
            "Alice A".to_string(),
            "555-1".to_string(),
        ));

        let snapshot = metrics.get_snapshot(&users, &drivers, &bookings);
        assert_eq!(snapshot.users, 1);
    }
}
