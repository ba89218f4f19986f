/// Playlists API routes
use crate::{error::Result, middleware::Caller, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cadence_core::{
    storage::StorageContext,
    types::{CreatePlaylist, PlaylistId, PlaylistSummary, PlaylistTrack, PlaylistTrackId, TrackId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddTrackRequest {
    pub track_id: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePlaylistResponse {
    pub id: PlaylistId,
}

#[derive(Debug, Serialize)]
pub struct AddTrackResponse {
    pub id: PlaylistTrackId,
}

/// GET /api/playlists
/// Playlists owned by the caller
pub async fn list_playlists(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<PlaylistSummary>>> {
    let playlists = app_state.storage(&caller).get_user_playlists().await?;
    Ok(Json(playlists))
}

/// POST /api/playlists
pub async fn create_playlist(
    State(app_state): State<AppState>,
    caller: Caller,
    Json(req): Json<CreatePlaylist>,
) -> Result<Json<CreatePlaylistResponse>> {
    let id = app_state.storage(&caller).create_playlist(req).await?;
    Ok(Json(CreatePlaylistResponse { id }))
}

/// DELETE /api/playlists/:id
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<StatusCode> {
    app_state
        .storage(&caller)
        .delete_playlist(&PlaylistId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/playlists/:id/tracks
pub async fn playlist_tracks(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<PlaylistTrack>>> {
    let tracks = app_state
        .storage(&caller)
        .get_playlist_tracks(&PlaylistId::new(id))
        .await?;
    Ok(Json(tracks))
}

/// POST /api/playlists/:id/tracks
pub async fn add_track_to_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    caller: Caller,
    Json(req): Json<AddTrackRequest>,
) -> Result<Json<AddTrackResponse>> {
    let id = app_state
        .storage(&caller)
        .add_track_to_playlist(&PlaylistId::new(id), &TrackId::new(req.track_id))
        .await?;
    Ok(Json(AddTrackResponse { id }))
}

/// DELETE /api/playlists/:id/tracks/:track_id
pub async fn remove_track_from_playlist(
    Path((id, track_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<StatusCode> {
    app_state
        .storage(&caller)
        .remove_track_from_playlist(&PlaylistId::new(id), &TrackId::new(track_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
