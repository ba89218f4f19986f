//! Storage trait: the operation surface seen by one caller

use crate::error::Result;
use crate::types::{
    CreatePlaylist, LibraryEntryId, LibraryTrack, PlaybackStateId, PlaybackView, PlaylistId,
    PlaylistSummary, PlaylistTrack, PlaylistTrackId, RecentlyPlayedTrack, SeedOutcome, Track,
    TrackId, UserId,
};
use async_trait::async_trait;

/// Storage context bound to a (possibly anonymous) caller
///
/// Authentication is asymmetric and implementations must keep it that way:
/// user-scoped queries without a caller return an empty / `false` / `None`
/// result, while mutations without a caller fail with
/// [`CadenceError::AuthenticationRequired`](crate::CadenceError::AuthenticationRequired).
/// Catalog operations need no caller at all.
#[async_trait]
pub trait StorageContext: Send + Sync {
    /// The resolved caller, if any
    fn user_id(&self) -> Option<&UserId>;

    // ========================================================================
    // Catalog
    // ========================================================================

    /// All tracks, newest first
    async fn get_all_tracks(&self) -> Result<Vec<Track>>;

    /// Top ten tracks by play count
    async fn get_popular_tracks(&self) -> Result<Vec<Track>>;

    /// Tracks with exactly this genre
    async fn get_tracks_by_genre(&self, genre: &str) -> Result<Vec<Track>>;

    /// Case-insensitive substring search on title, artist and album
    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>>;

    /// Distinct genres in first-seen order
    async fn get_genres(&self) -> Result<Vec<String>>;

    /// Single track lookup
    async fn get_track(&self, id: &TrackId) -> Result<Option<Track>>;

    /// Insert the demo catalog unless any track exists
    async fn seed_catalog(&self) -> Result<SeedOutcome>;

    /// Bump a track's play counter
    async fn increment_plays(&self, id: &TrackId) -> Result<()>;

    // ========================================================================
    // Library
    // ========================================================================

    /// Saved tracks, newest first
    async fn get_library(&self) -> Result<Vec<LibraryTrack>>;

    async fn is_in_library(&self, track_id: &TrackId) -> Result<bool>;

    /// Save a track; returns the existing entry when already saved
    async fn add_to_library(&self, track_id: &TrackId) -> Result<LibraryEntryId>;

    /// Remove a saved track; absent entries are ignored
    async fn remove_from_library(&self, track_id: &TrackId) -> Result<()>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Playlists owned by the caller, newest first, with track counts
    async fn get_user_playlists(&self) -> Result<Vec<PlaylistSummary>>;

    /// Tracks of a playlist ordered by position
    async fn get_playlist_tracks(&self, playlist_id: &PlaylistId) -> Result<Vec<PlaylistTrack>>;

    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<PlaylistId>;

    /// Append a track; returns the existing membership when already present
    async fn add_track_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<PlaylistTrackId>;

    async fn remove_track_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<()>;

    /// Delete a playlist together with all of its memberships
    async fn delete_playlist(&self, playlist_id: &PlaylistId) -> Result<()>;

    // ========================================================================
    // Playback
    // ========================================================================

    /// Current transport state with track references resolved
    async fn get_playback_state(&self) -> Result<Option<PlaybackView>>;

    /// Start a track; creates the playback record on first use
    async fn play(&self, track_id: &TrackId) -> Result<PlaybackStateId>;

    async fn pause(&self) -> Result<()>;

    async fn resume(&self) -> Result<()>;

    async fn set_volume(&self, volume: i32) -> Result<()>;

    async fn toggle_shuffle(&self) -> Result<()>;

    async fn cycle_repeat(&self) -> Result<()>;

    async fn add_to_queue(&self, track_id: &TrackId) -> Result<()>;

    /// Deduplicated recent plays, newest first
    async fn get_recently_played(&self) -> Result<Vec<RecentlyPlayedTrack>>;
}
