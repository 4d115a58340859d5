use crate::models::booking::{Booking, NewBooking, STATUS_BOOKED};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory store for ride bookings, keyed by a server-assigned id.
///
/// Ids start at 1 and increase by one per stored booking; the caller is
/// expected to have validated the request (including that the user exists)
/// before calling [`BookingStore::add`], so rejected requests never consume
/// an id.
pub struct BookingStore {
    bookings: DashMap<u64, Booking>,
    next_id: AtomicU64,
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            bookings: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Assign the next id, force the status to [`STATUS_BOOKED`], store the
    /// booking, and return the stored record.
    pub fn add(&self, new: NewBooking) -> Booking {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let booking = Booking {
            id,
            username: new.username,
            pickup: new.pickup,
            dropoff: new.dropoff,
            status: STATUS_BOOKED.to_string(),
        };
        self.bookings.insert(id, booking.clone());
        booking
    }

    pub fn get(&self, id: u64) -> Option<Booking> {
        self.bookings.get(&id).map(|entry| entry.value().clone())
    }

    /// All bookings made under the given username, ordered by ascending id.
    /// Ids are assigned in insertion order, so this is insertion order too.
    pub fn for_user(&self, username: &str) -> Vec<Booking> {
        let mut matches: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|entry| entry.value().username == username)
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by_key(|booking| booking.id);
        matches
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}
