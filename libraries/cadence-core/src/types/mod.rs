mod history;
mod ids;
mod library;
mod playback_state;
mod playlist;
mod track;
mod user;

pub use history::{RecentlyPlayedEntry, RecentlyPlayedTrack};
pub use ids::{
    HistoryEntryId, LibraryEntryId, PlaybackStateId, PlaylistId, PlaylistTrackId, TrackId, UserId,
};
pub use library::{LibraryEntry, LibraryTrack};
pub use playback_state::{
    PlaybackState, PlaybackView, RepeatMode, DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME,
};
pub use playlist::{CreatePlaylist, Playlist, PlaylistEntry, PlaylistSummary, PlaylistTrack};
pub use track::{CreateTrack, SeedOutcome, Track};
pub use user::User;
