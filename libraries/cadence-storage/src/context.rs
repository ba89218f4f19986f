use crate::{library, playback_state, playlists, recently_played, tracks};
use async_trait::async_trait;
use cadence_core::{error::Result, storage::StorageContext, types::*, CadenceError};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
///
/// Binds a pool to the caller resolved for one request. Queries scoped to a
/// user read as empty without a caller; mutations fail with
/// [`CadenceError::AuthenticationRequired`].
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
    user_id: Option<UserId>,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool, user_id: Option<UserId>) -> Self {
        Self { pool, user_id }
    }

    /// Context without a caller
    pub fn anonymous(pool: SqlitePool) -> Self {
        Self::new(pool, None)
    }

    pub fn for_user(pool: SqlitePool, user_id: UserId) -> Self {
        Self::new(pool, Some(user_id))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn require_user(&self) -> Result<&UserId> {
        self.user_id.as_ref().ok_or(CadenceError::AuthenticationRequired)
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    // Catalog
    async fn get_all_tracks(&self) -> Result<Vec<Track>> {
        tracks::get_all(&self.pool).await
    }

    async fn get_popular_tracks(&self) -> Result<Vec<Track>> {
        tracks::get_popular(&self.pool).await
    }

    async fn get_tracks_by_genre(&self, genre: &str) -> Result<Vec<Track>> {
        tracks::get_by_genre(&self.pool, genre).await
    }

    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        tracks::search(&self.pool, query).await
    }

    async fn get_genres(&self) -> Result<Vec<String>> {
        tracks::get_genres(&self.pool).await
    }

    async fn get_track(&self, id: &TrackId) -> Result<Option<Track>> {
        tracks::get_by_id(&self.pool, id).await
    }

    async fn seed_catalog(&self) -> Result<SeedOutcome> {
        tracks::seed(&self.pool).await
    }

    async fn increment_plays(&self, id: &TrackId) -> Result<()> {
        tracks::increment_plays(&self.pool, id).await
    }

    // Library
    async fn get_library(&self) -> Result<Vec<LibraryTrack>> {
        match &self.user_id {
            Some(user_id) => library::get(&self.pool, user_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn is_in_library(&self, track_id: &TrackId) -> Result<bool> {
        match &self.user_id {
            Some(user_id) => library::is_in_library(&self.pool, user_id, track_id).await,
            None => Ok(false),
        }
    }

    async fn add_to_library(&self, track_id: &TrackId) -> Result<LibraryEntryId> {
        let user_id = self.require_user()?;
        library::add(&self.pool, user_id, track_id).await
    }

    async fn remove_from_library(&self, track_id: &TrackId) -> Result<()> {
        let user_id = self.require_user()?;
        library::remove(&self.pool, user_id, track_id).await
    }

    // Playlists
    async fn get_user_playlists(&self) -> Result<Vec<PlaylistSummary>> {
        match &self.user_id {
            Some(user_id) => playlists::get_user_playlists(&self.pool, user_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn get_playlist_tracks(&self, playlist_id: &PlaylistId) -> Result<Vec<PlaylistTrack>> {
        playlists::get_tracks(&self.pool, self.user_id.as_ref(), playlist_id).await
    }

    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<PlaylistId> {
        let user_id = self.require_user()?;
        playlists::create(&self.pool, user_id, playlist).await
    }

    async fn add_track_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<PlaylistTrackId> {
        let user_id = self.require_user()?;
        playlists::add_track(&self.pool, user_id, playlist_id, track_id).await
    }

    async fn remove_track_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<()> {
        let user_id = self.require_user()?;
        playlists::remove_track(&self.pool, user_id, playlist_id, track_id).await
    }

    async fn delete_playlist(&self, playlist_id: &PlaylistId) -> Result<()> {
        let user_id = self.require_user()?;
        playlists::delete(&self.pool, user_id, playlist_id).await
    }

    // Playback
    async fn get_playback_state(&self) -> Result<Option<PlaybackView>> {
        match &self.user_id {
            Some(user_id) => playback_state::get_view(&self.pool, user_id).await,
            None => Ok(None),
        }
    }

    async fn play(&self, track_id: &TrackId) -> Result<PlaybackStateId> {
        let user_id = self.require_user()?;
        playback_state::play(&self.pool, user_id, track_id).await
    }

    async fn pause(&self) -> Result<()> {
        let user_id = self.require_user()?;
        playback_state::pause(&self.pool, user_id).await
    }

    async fn resume(&self) -> Result<()> {
        let user_id = self.require_user()?;
        playback_state::resume(&self.pool, user_id).await
    }

    async fn set_volume(&self, volume: i32) -> Result<()> {
        let user_id = self.require_user()?;
        playback_state::set_volume(&self.pool, user_id, volume).await
    }

    async fn toggle_shuffle(&self) -> Result<()> {
        let user_id = self.require_user()?;
        playback_state::toggle_shuffle(&self.pool, user_id).await
    }

    async fn cycle_repeat(&self) -> Result<()> {
        let user_id = self.require_user()?;
        playback_state::cycle_repeat(&self.pool, user_id).await
    }

    async fn add_to_queue(&self, track_id: &TrackId) -> Result<()> {
        let user_id = self.require_user()?;
        playback_state::add_to_queue(&self.pool, user_id, track_id).await
    }

    async fn get_recently_played(&self) -> Result<Vec<RecentlyPlayedTrack>> {
        match &self.user_id {
            Some(user_id) => recently_played::get_recently_played(&self.pool, user_id).await,
            None => Ok(Vec::new()),
        }
    }
}
