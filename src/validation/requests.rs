// Request payloads and presence validation
//
// Every field arrives as Option so that an absent or null JSON field can be
// told apart from an empty string. validate() rejects the request on the
// first absent field; it performs presence checks only.

use crate::core::error::ValidationError;
use crate::models::booking::NewBooking;
use crate::models::driver::NewDriver;
use crate::models::user::User;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<User, ValidationError> {
        let username = self.username.ok_or(ValidationError::MissingField("username"))?;
        let password = self.password.ok_or(ValidationError::MissingField("password"))?;
        let full_name = self.full_name.ok_or(ValidationError::MissingField("fullName"))?;
        let phone = self.phone.ok_or(ValidationError::MissingField("phone"))?;

        Ok(User::new(username, password, full_name, phone))
    }
}

/// Login credentials. Missing fields are not a validation failure here: an
/// absent username simply matches no account and an absent password matches
/// no stored password, so both surface as an authorization failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Partial profile update. Absent fields mean "leave unchanged".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRequest {
    pub name: Option<String>,
    pub vehicle_number: Option<String>,
    pub availability: Option<String>,
}

impl DriverRequest {
    pub fn validate(self) -> Result<NewDriver, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let vehicle_number = self
            .vehicle_number
            .ok_or(ValidationError::MissingField("vehicleNumber"))?;
        let availability = self
            .availability
            .ok_or(ValidationError::MissingField("availability"))?;

        Ok(NewDriver {
            name,
            vehicle_number,
            availability,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub username: Option<String>,
    pub pickup: Option<String>,
    pub drop: Option<String>,
    /// Accepted and discarded; the store forces the status itself.
    #[serde(default)]
    #[allow(dead_code)]
    pub status: Option<String>,
}

impl BookingRequest {
    pub fn validate(self) -> Result<NewBooking, ValidationError> {
        let username = self.username.ok_or(ValidationError::MissingField("username"))?;
        let pickup = self.pickup.ok_or(ValidationError::MissingField("pickup"))?;
        let dropoff = self.drop.ok_or(ValidationError::MissingField("drop"))?;

        Ok(NewBooking {
            username,
            pickup,
            dropoff,
        })
    }
}
