/// Library API routes
use crate::{error::Result, middleware::Caller, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cadence_core::{
    storage::StorageContext,
    types::{LibraryEntryId, LibraryTrack, TrackId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddToLibraryRequest {
    pub track_id: String,
}

#[derive(Debug, Serialize)]
pub struct AddToLibraryResponse {
    pub id: LibraryEntryId,
}

#[derive(Debug, Serialize)]
pub struct InLibraryResponse {
    pub in_library: bool,
}

/// GET /api/library
pub async fn get_library(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<LibraryTrack>>> {
    let tracks = app_state.storage(&caller).get_library().await?;
    Ok(Json(tracks))
}

/// GET /api/library/:track_id
pub async fn is_in_library(
    Path(track_id): Path<String>,
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<InLibraryResponse>> {
    let in_library = app_state
        .storage(&caller)
        .is_in_library(&TrackId::new(track_id))
        .await?;
    Ok(Json(InLibraryResponse { in_library }))
}

/// POST /api/library
pub async fn add_to_library(
    State(app_state): State<AppState>,
    caller: Caller,
    Json(req): Json<AddToLibraryRequest>,
) -> Result<Json<AddToLibraryResponse>> {
    let id = app_state
        .storage(&caller)
        .add_to_library(&TrackId::new(req.track_id))
        .await?;
    Ok(Json(AddToLibraryResponse { id }))
}

/// DELETE /api/library/:track_id
pub async fn remove_from_library(
    Path(track_id): Path<String>,
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<StatusCode> {
    app_state
        .storage(&caller)
        .remove_from_library(&TrackId::new(track_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
