//! Watchlist API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{parse_object_id, ApiResult};
use crate::models::{AddWatchlistRequest, DeleteAck, InsertAck, WatchlistEntry};
use crate::AppState;

/// POST /watchlist - Add a game to a user's watchlist.
///
/// A second add of the same (userEmail, game._id) pair answers 400 with a
/// CONFLICT code and leaves the first entry untouched.
pub async fn add_watchlist_entry(
    State(state): State<AppState>,
    Json(request): Json<AddWatchlistRequest>,
) -> ApiResult<InsertAck> {
    let id = state.repo.add_watchlist_entry(request).await?;
    Ok(Json(InsertAck {
        inserted_id: id.to_hex(),
    }))
}

/// GET /watchlist/:email - List a user's watchlist entries.
pub async fn list_watchlist(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Vec<WatchlistEntry>> {
    Ok(Json(state.repo.watchlist_by_owner(&email).await?))
}

/// DELETE /watchlist/:id - Remove a watchlist entry by its identifier.
///
/// Deleting an id that no longer exists is not an error; the acknowledgment
/// reports zero removals.
pub async fn delete_watchlist_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DeleteAck> {
    let oid = parse_object_id(&id)?;
    Ok(Json(state.repo.delete_watchlist_entry(oid).await?))
}
