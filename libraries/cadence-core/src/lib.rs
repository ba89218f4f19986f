//! Cadence Core
//!
//! Platform-agnostic domain types, the playback state machine and error
//! handling for Cadence.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `PlaybackState`, `User`, etc.
//! - **State Machine**: transitions on `PlaybackState` and the recently-played ranking
//! - **Storage Trait**: `StorageContext`, the per-caller operation surface
//! - **Error Handling**: Unified `CadenceError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadence_core::types::{PlaybackState, RepeatMode, TrackId, UserId};
//!
//! let mut state = PlaybackState::started(UserId::new("alice"), TrackId::new("t1"), 0);
//! assert!(state.is_playing);
//! assert_eq!(state.volume, 80);
//!
//! state.cycle_repeat();
//! assert_eq!(state.repeat, RepeatMode::All);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod history;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CadenceError, Result};
pub use storage::StorageContext;

pub use types::{
    CreatePlaylist, CreateTrack, HistoryEntryId, LibraryEntry, LibraryEntryId, LibraryTrack,
    PlaybackState, PlaybackStateId, PlaybackView, Playlist, PlaylistId, PlaylistSummary,
    PlaylistTrack, PlaylistTrackId, RecentlyPlayedEntry, RecentlyPlayedTrack, RepeatMode,
    SeedOutcome, Track, TrackId, User, UserId,
};
