//! Saved-track library types

use super::ids::{LibraryEntryId, TrackId, UserId};
use super::track::Track;
use serde::{Deserialize, Serialize};

/// A (user, track) pair in a user's library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub id: LibraryEntryId,
    pub user_id: UserId,
    pub track_id: TrackId,
    /// Unix epoch milliseconds
    pub added_at: i64,
}

/// Library listing row: the track plus when it was saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryTrack {
    #[serde(flatten)]
    pub track: Track,
    pub added_at: i64,
    pub library_id: LibraryEntryId,
}
