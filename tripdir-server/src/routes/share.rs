//! Share link resolution.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use tripdir_core::share::{self, ShareLookup, SharedTrip};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/share/{token}", get(resolve_share))
}

/// GET /share/:token - Resolve a share link to its full trip bundle.
///
/// Unknown or malformed tokens get a 404 with a JSON body, never a 500;
/// visitors with a stale link see "not found", not an error page.
async fn resolve_share(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<SharedTrip>, AppError> {
    let tripdir = state.tripdir()?;

    match share::resolve_share(tripdir.trips(), &token) {
        ShareLookup::Found(handle) => Ok(Json(SharedTrip::load(&handle)?)),
        ShareLookup::NotFound => Err(AppError::NotFound(format!(
            "No shared trip for token '{token}'"
        ))),
    }
}
