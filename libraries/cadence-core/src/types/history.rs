//! Recently-played log types

use super::ids::{HistoryEntryId, TrackId, UserId};
use super::track::Track;
use serde::{Deserialize, Serialize};

/// One play event. The log is append-only: every `play` adds an entry, even
/// for a track that is already current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentlyPlayedEntry {
    pub id: HistoryEntryId,
    pub user_id: UserId,
    pub track_id: TrackId,
    /// Unix epoch milliseconds
    pub played_at: i64,
}

/// A resolved history row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedTrack {
    #[serde(flatten)]
    pub track: Track,
    pub played_at: i64,
}
