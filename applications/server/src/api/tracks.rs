/// Catalog API routes
///
/// None of these need a signed-in caller.
use crate::{error::Result, middleware::Caller, state::AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use cadence_core::{
    storage::StorageContext,
    types::{SeedOutcome, Track, TrackId},
    CadenceError,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/tracks
/// All tracks, newest first
pub async fn list_tracks(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<Track>>> {
    let tracks = app_state.storage(&caller).get_all_tracks().await?;
    Ok(Json(tracks))
}

/// GET /api/tracks/popular
pub async fn popular_tracks(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<Track>>> {
    let tracks = app_state.storage(&caller).get_popular_tracks().await?;
    Ok(Json(tracks))
}

/// GET /api/tracks/genres
pub async fn list_genres(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<String>>> {
    let genres = app_state.storage(&caller).get_genres().await?;
    Ok(Json(genres))
}

/// GET /api/tracks/genre/:genre
pub async fn tracks_by_genre(
    Path(genre): Path<String>,
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<Track>>> {
    let tracks = app_state.storage(&caller).get_tracks_by_genre(&genre).await?;
    Ok(Json(tracks))
}

/// GET /api/tracks/search?q=
pub async fn search_tracks(
    State(app_state): State<AppState>,
    caller: Caller,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Track>>> {
    let tracks = app_state.storage(&caller).search_tracks(&query.q).await?;
    Ok(Json(tracks))
}

/// GET /api/tracks/:id
pub async fn get_track(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Track>> {
    let track_id = TrackId::new(id);
    let track = app_state
        .storage(&caller)
        .get_track(&track_id)
        .await?
        .ok_or(CadenceError::TrackNotFound(track_id))?;
    Ok(Json(track))
}

/// POST /api/tracks/seed
/// Load the demo catalog into an empty database
pub async fn seed_catalog(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<SeedOutcome>> {
    let outcome = app_state.storage(&caller).seed_catalog().await?;
    Ok(Json(outcome))
}

/// POST /api/tracks/:id/plays
/// Bump the play counter and return the updated track
pub async fn increment_plays(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Track>> {
    let storage = app_state.storage(&caller);
    let track_id = TrackId::new(id);

    storage.increment_plays(&track_id).await?;

    let track = storage
        .get_track(&track_id)
        .await?
        .ok_or(CadenceError::TrackNotFound(track_id))?;
    Ok(Json(track))
}
