//! Admin endpoints: login plus token-gated event operations.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use shared::{auth, password, AuthenticatedUser, Error, Event};

use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(login))
        .route("/api/admin/events", get(list_events))
        .route("/api/admin/events", post(create_event))
        .route("/api/admin/events/{id}", put(update_event))
        .route("/api/admin/events/{id}", delete(delete_event))
}

/// Pull the bearer token off the request and verify it. Every admin
/// handler calls this before touching the store, so a rejected
/// request has no side effects.
fn authorize(headers: &HeaderMap, state: &AppState) -> Result<AuthenticatedUser, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| Error::Auth("Access token required".to_string()))?;

    let claims = auth::verify_token(token, &state.config.jwt_secret)?;
    Ok(claims.into())
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

/// POST /api/admin/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(username), Some(password)) = (req.username, req.password) else {
        return Err(Error::Validation("Username and password required".to_string()).into());
    };
    if username.is_empty() || password.is_empty() {
        return Err(Error::Validation("Username and password required".to_string()).into());
    }

    // Unknown usernames and wrong passwords produce the same response.
    let credential = state
        .store
        .get_credential_by_username(&username)
        .await?
        .ok_or_else(|| Error::Auth("Invalid credentials".to_string()))?;

    if !password::verify_password(&password, &credential.password_hash).await? {
        return Err(Error::Auth("Invalid credentials".to_string()).into());
    }

    let token = auth::issue_token(&credential, &state.config.jwt_secret)?;
    info!(username = %credential.username, "Admin login");

    Ok(Json(json!({
        "success": true,
        "token": token,
        "user": { "id": credential.id, "username": credential.username },
    })))
}

/// GET /api/admin/events - same result set as the public list, kept
/// as a separate endpoint so the admin view can diverge later.
async fn list_events(
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, ApiError> {
    authorize(&headers, &state)?;

    let events = state.store.list_events().await?;
    Ok(Json(events))
}

#[derive(Debug, Deserialize)]
struct EventRequest {
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
}

impl EventRequest {
    /// Required fields, checked before any store call.
    fn into_fields(self) -> Result<(String, String, String), Error> {
        match (self.title, self.date) {
            (Some(title), Some(date)) if !title.is_empty() && !date.is_empty() => {
                Ok((title, date, self.description.unwrap_or_default()))
            }
            _ => Err(Error::Validation("Title and date required".to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateEventResponse {
    success: bool,
    event: Event,
}

/// POST /api/admin/events
async fn create_event(
    headers: HeaderMap,
    State(state): State<AppState>,
    Json(req): Json<EventRequest>,
) -> Result<Json<CreateEventResponse>, ApiError> {
    authorize(&headers, &state)?;
    let (title, date, description) = req.into_fields()?;

    let event = state.store.insert_event(&title, &date, &description).await?;
    info!(id = event.id, "Created event");

    Ok(Json(CreateEventResponse {
        success: true,
        event,
    }))
}

/// PUT /api/admin/events/{id}
async fn update_event(
    headers: HeaderMap,
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(req): Json<EventRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    authorize(&headers, &state)?;
    let (title, date, description) = req.into_fields()?;

    state
        .store
        .update_event(id, &title, &date, &description)
        .await?;
    info!(id, "Updated event");

    Ok(Json(json!({
        "success": true,
        "message": "Event updated successfully",
    })))
}

/// DELETE /api/admin/events/{id}
async fn delete_event(
    headers: HeaderMap,
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    authorize(&headers, &state)?;

    state.store.delete_event(id).await?;
    info!(id, "Deleted event");

    Ok(Json(json!({
        "success": true,
        "message": "Event deleted successfully",
    })))
}
