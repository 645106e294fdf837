//! Route table and error plumbing for the HTTP API.

pub mod admin;
pub mod events;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tracing::error;

use crate::state::AppState;

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(events::router())
        .merge(admin::router())
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "OK", "timestamp": Utc::now().to_rfc3339() }))
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "message": "Route not found" })),
    )
        .into_response()
}

/// Converts `shared::Error` into the `{success:false, message}`
/// envelope. Server-side failures are logged here and reach the
/// client only as a generic message.
pub struct ApiError(shared::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let body = Json(json!({
            "success": false,
            "message": self.0.public_message(),
        }));
        (status, body).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<shared::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
