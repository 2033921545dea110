//! Trip listing endpoints (local use; share links are the public surface).

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/trips", get(list_trips))
}

/// Trip info returned by API
#[derive(Serialize)]
pub struct TripInfo {
    pub slug: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub shared: bool,
}

/// GET /trips - List all trips
async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<TripInfo>>, AppError> {
    let tripdir = state.tripdir()?;

    let trips: Vec<TripInfo> = tripdir
        .trips()
        .into_iter()
        .map(|handle| TripInfo {
            slug: handle.slug.clone(),
            name: handle.trip.name.clone(),
            start_date: handle.trip.start_date.to_string(),
            end_date: handle.trip.end_date.to_string(),
            shared: handle.trip.share_token.is_some(),
        })
        .collect();

    Ok(Json(trips))
}
