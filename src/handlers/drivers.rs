use crate::core::error::DriverError;
use crate::core::state::AppState;
use crate::validation::requests::DriverRequest;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Register a driver
///
/// POST /api/drivers
///
/// Validation runs before an id is drawn, so a rejected request never
/// consumes one.
pub async fn driver_add_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DriverRequest>,
) -> Result<Response, DriverError> {
    state.metrics.increment_requests();

    let new_driver = request.validate().map_err(|e| {
        warn!(error = %e, "Driver registration rejected");
        state.metrics.increment_failed();
        DriverError::from(e)
    })?;

    let driver = state.driver_store.add(new_driver);

    info!(
        driver_id = driver.id,
        vehicle_number = %driver.vehicle_number,
        "Driver added"
    );

    Ok((StatusCode::OK, Json(driver)).into_response())
}

/// GET /api/drivers/count
pub async fn driver_count_handler(State(state): State<Arc<AppState>>) -> Json<usize> {
    state.metrics.increment_requests();
    Json(state.driver_store.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config::default()))
    }

    fn driver_request(name: &str) -> DriverRequest {
        DriverRequest {
            name: Some(name.to_string()),
            vehicle_number: Some("KA-01-1234".to_string()),
            availability: Some("available".to_string()),
        }
    }

    #[tokio::test]
    async fn test_add_driver_assigns_sequential_ids() {
        let state = create_test_state();

        driver_add_handler(State(state.clone()), Json(driver_request("Ravi")))
            .await
            .unwrap();
        driver_add_handler(State(state.clone()), Json(driver_request("Sana")))
            .await
            .unwrap();

        assert_eq!(state.driver_store.get(1).unwrap().name, "Ravi");
        assert_eq!(state.driver_store.get(2).unwrap().name, "Sana");
        assert_eq!(state.driver_store.len(), 2);
    }

    #[tokio::test]
    async fn test_add_driver_missing_field() {
        let state = create_test_state();

        let request = DriverRequest {
            availability: None,
            ..driver_request("Ravi")
        };
        let result = driver_add_handler(State(state.clone()), Json(request)).await;

        assert!(result.is_err());
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.driver_store.len(), 0);
    }

    #[tokio::test]
    async fn test_rejected_add_does_not_consume_an_id() {
        let state = create_test_state();

        driver_add_handler(State(state.clone()), Json(driver_request("Ravi")))
            .await
            .unwrap();

        let bad = DriverRequest {
            name: None,
            ..driver_request("")
        };
        driver_add_handler(State(state.clone()), Json(bad))
            .await
            .unwrap_err();

        // The failed attempt must not leave a gap
        driver_add_handler(State(state.clone()), Json(driver_request("Sana")))
            .await
            .unwrap();

        assert_eq!(state.driver_store.get(2).unwrap().name, "Sana");
    }

    #[tokio::test]
    async fn test_driver_count() {
        let state = create_test_state();
        assert_eq!(driver_count_handler(State(state.clone())).await.0, 0);

        driver_add_handler(State(state.clone()), Json(driver_request("Ravi")))
            .await
            .unwrap();

        assert_eq!(driver_count_handler(State(state)).await.0, 1);
    }
}
