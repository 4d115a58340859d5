use crate::core::error::UserError;
use crate::core::state::AppState;
use crate::validation::requests::{LoginRequest, ProfileUpdateRequest, RegisterRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Register a new user
///
/// POST /api/register
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, UserError> {
    state.metrics.increment_requests();

    let user = request.validate().map_err(|e| {
        warn!(error = %e, "Registration rejected");
        state.metrics.increment_failed();
        UserError::from(e)
    })?;

    let username = user.username.clone();

    if !state.user_store.register(user) {
        warn!(username = %username, "Username already registered");
        state.metrics.increment_failed();
        return Err(UserError::UsernameTaken);
    }

    info!(
        username = %username,
        users = state.user_store.len(),
        "User registered"
    );

    Ok((StatusCode::OK, "User registered").into_response())
}

/// Log a user in
///
/// POST /api/login
///
/// Plaintext password comparison against the stored record. On success the
/// stored record is returned as-is, which includes the password field.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(creds): Json<LoginRequest>,
) -> Result<Response, UserError> {
    state.metrics.increment_requests();

    let user = creds
        .username
        .as_deref()
        .and_then(|username| state.user_store.get(username));

    let user = match user {
        Some(user) if creds.password.as_deref() == Some(user.password.as_str()) => user,
        _ => {
            warn!(username = ?creds.username, "Login failed");
            state.metrics.increment_failed();
            return Err(UserError::InvalidCredentials);
        }
    };

    info!(username = %user.username, "Login succeeded");

    Ok((StatusCode::OK, Json(user)).into_response())
}

/// Update the mutable parts of a profile
///
/// PUT /api/profile/{username}
///
/// Only fields present in the body are overwritten; username and password
/// cannot be changed here.
pub async fn profile_update_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(update): Json<ProfileUpdateRequest>,
) -> Result<Response, UserError> {
    state.metrics.increment_requests();

    if !state
        .user_store
        .update_profile(&username, update.full_name, update.phone)
    {
        warn!(username = %username, "Profile update for unknown user");
        state.metrics.increment_failed();
        return Err(UserError::NotFound);
    }

    info!(username = %username, "Profile updated");

    Ok((StatusCode::OK, "Profile updated").into_response())
}

/// GET /api/users/count
pub async fn user_count_handler(State(state): State<Arc<AppState>>) -> Json<usize> {
    state.metrics.increment_requests();
    Json(state.user_store.len())
}
