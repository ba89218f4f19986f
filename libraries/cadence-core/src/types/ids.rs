/// ID types for Cadence entities
///
/// Every record is keyed by an opaque string (a v4 UUID when generated
/// locally). Storage binds them with `as_str()` and rebuilds them with `new()`.
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// User identifier
    UserId
);
string_id!(
    /// Catalog track identifier
    TrackId
);
string_id!(
    /// Playlist identifier
    PlaylistId
);
string_id!(
    /// Identifier of a saved-track row in a user's library
    LibraryEntryId
);
string_id!(
    /// Identifier of a playlist membership row
    PlaylistTrackId
);
string_id!(
    /// Identifier of a user's playback-state record
    PlaybackStateId
);
string_id!(
    /// Identifier of a recently-played log entry
    HistoryEntryId
);
