/// Playback state API routes
///
/// Every mutation answers with the resolved state after the change, or
/// `null` when the caller has never started playback.
use crate::{error::Result, middleware::Caller, state::AppState};
use axum::{extract::State, Json};
use cadence_core::{
    storage::StorageContext,
    types::{PlaybackView, RecentlyPlayedTrack, TrackId},
};
use cadence_storage::LocalStorageContext;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    pub track_id: String,
}

#[derive(Debug, Deserialize)]
pub struct VolumeRequest {
    pub volume: i32,
}

async fn current(storage: &LocalStorageContext) -> Result<Json<Option<PlaybackView>>> {
    Ok(Json(storage.get_playback_state().await?))
}

/// GET /api/playback - Get current playback state
pub async fn get_playback(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Option<PlaybackView>>> {
    current(&app_state.storage(&caller)).await
}

/// POST /api/playback/play - Start a track
pub async fn play(
    State(app_state): State<AppState>,
    caller: Caller,
    Json(req): Json<TrackRequest>,
) -> Result<Json<Option<PlaybackView>>> {
    let storage = app_state.storage(&caller);
    storage.play(&TrackId::new(req.track_id)).await?;
    current(&storage).await
}

/// POST /api/playback/pause
pub async fn pause(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Option<PlaybackView>>> {
    let storage = app_state.storage(&caller);
    storage.pause().await?;
    current(&storage).await
}

/// POST /api/playback/resume
pub async fn resume(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Option<PlaybackView>>> {
    let storage = app_state.storage(&caller);
    storage.resume().await?;
    current(&storage).await
}

/// POST /api/playback/volume - Set volume (clamped to 0-100)
pub async fn set_volume(
    State(app_state): State<AppState>,
    caller: Caller,
    Json(req): Json<VolumeRequest>,
) -> Result<Json<Option<PlaybackView>>> {
    let storage = app_state.storage(&caller);
    storage.set_volume(req.volume).await?;
    current(&storage).await
}

/// POST /api/playback/shuffle - Toggle shuffle
pub async fn toggle_shuffle(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Option<PlaybackView>>> {
    let storage = app_state.storage(&caller);
    storage.toggle_shuffle().await?;
    current(&storage).await
}

/// POST /api/playback/repeat - Advance the repeat mode
pub async fn cycle_repeat(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Option<PlaybackView>>> {
    let storage = app_state.storage(&caller);
    storage.cycle_repeat().await?;
    current(&storage).await
}

/// POST /api/playback/queue - Append a track to the queue
pub async fn add_to_queue(
    State(app_state): State<AppState>,
    caller: Caller,
    Json(req): Json<TrackRequest>,
) -> Result<Json<Option<PlaybackView>>> {
    let storage = app_state.storage(&caller);
    storage.add_to_queue(&TrackId::new(req.track_id)).await?;
    current(&storage).await
}

/// GET /api/playback/recent
pub async fn recently_played(
    State(app_state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<RecentlyPlayedTrack>>> {
    let tracks = app_state.storage(&caller).get_recently_played().await?;
    Ok(Json(tracks))
}
