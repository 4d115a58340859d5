// Centralized error handling for the API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// A required request field was absent or null.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors surfaced by the user endpoints (register, login, profile).
#[derive(Error, Debug)]
pub enum UserError {
    /// Registration with any of the four fields absent.
    /// The body text matches what API clients of the old system expect.
    #[error("All fields required")]
    MissingFields(#[from] ValidationError),

    #[error("Username taken")]
    UsernameTaken,

    /// Unknown username or wrong password; the two are deliberately
    /// indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    NotFound,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserError::MissingFields(_) => StatusCode::BAD_REQUEST,
            UserError::UsernameTaken => StatusCode::CONFLICT,
            UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            UserError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}

/// Errors surfaced by the driver endpoints.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl IntoResponse for DriverError {
    fn into_response(self) -> Response {
        let status = match &self {
            DriverError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}

/// Errors surfaced by the booking endpoints.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Booking under a username that was never registered.
    #[error("Unknown user: {0}")]
    UnknownUser(String),
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match &self {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::UnknownUser(_) => StatusCode::UNAUTHORIZED,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_status_codes() {
        let cases = [
            (
                UserError::MissingFields(ValidationError::MissingField("phone")),
                StatusCode::BAD_REQUEST,
            ),
            (UserError::UsernameTaken, StatusCode::CONFLICT),
            (UserError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (UserError::NotFound, StatusCode::NOT_FOUND),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_register_error_body_text() {
        let error = UserError::MissingFields(ValidationError::MissingField("phone"));
        assert_eq!(error.to_string(), "All fields required");

        assert_eq!(UserError::UsernameTaken.to_string(), "Username taken");
    }

    #[test]
    fn test_driver_validation_maps_to_bad_request() {
        let error = DriverError::Validation(ValidationError::MissingField("name"));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_booking_unknown_user_maps_to_unauthorized() {
        let error = BookingError::UnknownUser("ghost".to_string());
        assert_eq!(error.to_string(), "Unknown user: ghost");
        assert_eq!(error.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_booking_validation_maps_to_bad_request() {
        let error = BookingError::Validation(ValidationError::MissingField("pickup"));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
