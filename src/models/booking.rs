use serde::{Deserialize, Serialize};

/// Every booking is created in this state and never leaves it. There is no
/// cancel, complete, or driver-assignment transition.
pub const STATUS_BOOKED: &str = "Booked";

/// A ride booking. The id is assigned by the store; the status is forced to
/// [`STATUS_BOOKED`] at creation regardless of caller input.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub username: String,
    pub pickup: String,
    #[serde(rename = "drop")]
    pub dropoff: String,
    pub status: String,
}

/// Booking fields as accepted from the API, before an id exists.
#[derive(Clone, Debug)]
pub struct NewBooking {
    pub username: String,
    pub pickup: String,
    pub dropoff: String,
}
