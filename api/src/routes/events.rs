//! Public event endpoints.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use shared::{Error, Event};

use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events))
        .route("/api/events/range", get(list_events_in_range))
}

/// GET /api/events - every event, date ascending
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.store.list_events().await?;
    Ok(Json(events))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeParams {
    start_date: Option<String>,
    end_date: Option<String>,
}

/// GET /api/events/range?startDate=&endDate= - inclusive date window
async fn list_events_in_range(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let (Some(start), Some(end)) = (params.start_date, params.end_date) else {
        return Err(Error::Validation("Start date and end date required".to_string()).into());
    };

    let events = state.store.list_events_in_range(&start, &end).await?;
    Ok(Json(events))
}
