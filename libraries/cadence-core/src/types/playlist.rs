//! Playlist types

use super::ids::{PlaylistId, PlaylistTrackId, TrackId, UserId};
use super::track::Track;
use serde::{Deserialize, Serialize};

/// A named collection of tracks owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub owner_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    /// Unix epoch milliseconds
    pub created_at: i64,
}

impl Playlist {
    /// Whether `user_id` owns this playlist
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Whether `caller` may read the playlist's tracks
    pub fn is_visible_to(&self, caller: Option<&UserId>) -> bool {
        self.is_public || caller.is_some_and(|user_id| self.is_owned_by(user_id))
    }
}

/// Playlist listing row with its membership count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub track_count: i64,
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Membership row linking a playlist to a track
///
/// `position` is the membership count at append time. Removing a row never
/// renumbers the others, so gaps are expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub id: PlaylistTrackId,
    pub playlist_id: PlaylistId,
    pub track_id: TrackId,
    pub position: i64,
    pub added_at: i64,
}

/// Track in a playlist, annotated with its position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(flatten)]
    pub track: Track,
    pub position: i64,
}
