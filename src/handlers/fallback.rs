use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

/// 404 for anything outside the route table.
pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "Unmatched route");

    (
        StatusCode::NOT_FOUND,
        "No such endpoint. The API lives under /api.",
    )
        .into_response()
}
