//! Catalog track types

use super::ids::TrackId;
use serde::{Deserialize, Serialize};

/// A catalog item with playable metadata
///
/// Immutable once created, except for the `plays` counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Cover art reference (URL)
    pub album_art: String,
    pub duration_seconds: i64,
    pub genre: String,
    /// Cumulative play count
    pub plays: i64,
    /// Creation timestamp (Unix epoch milliseconds)
    pub created_at: i64,
}

impl Track {
    /// Case-insensitive substring match against title, artist and album.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.artist.to_lowercase().contains(needle)
            || self.album.to_lowercase().contains(needle)
    }
}

/// Data for creating a new track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrack {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_art: String,
    pub duration_seconds: i64,
    pub genre: String,
    #[serde(default)]
    pub plays: i64,
}

/// Result of a catalog seeding attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOutcome {
    pub seeded: bool,
    pub message: String,
}
