use serde::{Deserialize, Serialize};

/// A registered rider account, keyed by username.
///
/// The password is stored and compared as plaintext, and the login endpoint
/// echoes the record back verbatim. Both behaviors are carried over from the
/// system this replaces.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

impl User {
    pub fn new(username: String, password: String, full_name: String, phone: String) -> Self {
        Self {
            username,
            password,
            full_name,
            phone,
        }
    }
}
