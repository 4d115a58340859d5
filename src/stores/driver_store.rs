use crate::models::driver::{Driver, NewDriver};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory store for drivers, keyed by a server-assigned id.
///
/// Ids start at 1 and increase by one per stored driver. The counter is only
/// touched here, after validation has already passed, so rejected requests
/// never consume an id.
pub struct DriverStore {
    drivers: DashMap<u64, Driver>,
    next_id: AtomicU64,
}

impl DriverStore {
    pub fn new() -> Self {
        Self {
            drivers: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Assign the next id, store the driver, and return the stored record.
    pub fn add(&self, new: NewDriver) -> Driver {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let driver = Driver {
            id,
            name: new.name,
            vehicle_number: new.vehicle_number,
            availability: new.availability,
        };
        self.drivers.insert(id, driver.clone());
        driver
    }

    pub fn get(&self, id: u64) -> Option<Driver> {
        self.drivers.get(&id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl Default for DriverStore {
    fn default() -> Self {
        Self::new()
    }
}
