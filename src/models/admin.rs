use serde::{Deserialize, Serialize};

/// Store cardinalities returned by the admin summary endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub users: usize,
    pub drivers: usize,
    pub bookings: usize,
}
