use serde::{Deserialize, Serialize};

/// A driver record. The id is assigned by the store, never by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: u64,
    pub name: String,
    pub vehicle_number: String,
    /// Free-form availability note ("available", "off duty", ...).
    /// No enumerated states are enforced.
    pub availability: String,
}

/// Driver fields as accepted from the API, before an id exists.
#[derive(Clone, Debug)]
pub struct NewDriver {
    pub name: String,
    pub vehicle_number: String,
    pub availability: String,
}
