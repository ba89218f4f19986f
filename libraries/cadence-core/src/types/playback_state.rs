/// Playback state: the single live transport record per user
use super::ids::{PlaybackStateId, TrackId, UserId};
use super::track::Track;
use serde::{Deserialize, Serialize};

/// Volume given to a freshly created playback record
pub const DEFAULT_VOLUME: i32 = 80;

/// Lowest accepted volume
pub const MIN_VOLUME: i32 = 0;

/// Highest accepted volume
pub const MAX_VOLUME: i32 = 100;

/// Repeat mode for playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    Off,
    All,
    One,
}

impl RepeatMode {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::All => "all",
            Self::One => "one",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "off" => Some(Self::Off),
            "all" => Some(Self::All),
            "one" => Some(Self::One),
            _ => None,
        }
    }

    /// Next mode in the `off → all → one → off` cycle
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}

impl std::fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user's transport state
///
/// Created by the first `play` and only patched afterwards. Progress is not
/// advanced here; clients tick it locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub id: PlaybackStateId,

    /// User ID this state belongs to
    pub user_id: UserId,

    /// Current track (if any)
    pub current_track_id: Option<TrackId>,

    /// Whether playback is currently playing
    pub is_playing: bool,

    /// Position in the current track, in seconds
    pub progress_seconds: f64,

    /// Volume level (0-100)
    pub volume: i32,

    pub shuffle: bool,

    pub repeat: RepeatMode,

    /// Up-next list; duplicates allowed
    pub queue_track_ids: Vec<TrackId>,

    /// Last update timestamp (Unix epoch milliseconds)
    pub updated_at: i64,
}

impl PlaybackState {
    /// The record a user gets on their very first `play`
    pub fn started(user_id: UserId, track_id: TrackId, now: i64) -> Self {
        Self {
            id: PlaybackStateId::generate(),
            user_id,
            current_track_id: Some(track_id),
            is_playing: true,
            progress_seconds: 0.0,
            volume: DEFAULT_VOLUME,
            shuffle: false,
            repeat: RepeatMode::Off,
            queue_track_ids: Vec::new(),
            updated_at: now,
        }
    }

    /// Switch to `track_id` from the beginning; volume, shuffle, repeat and
    /// queue are left alone.
    pub fn play(&mut self, track_id: TrackId) {
        self.current_track_id = Some(track_id);
        self.is_playing = true;
        self.progress_seconds = 0.0;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn resume(&mut self) {
        self.is_playing = true;
    }

    /// Set the volume, clamped to `MIN_VOLUME..=MAX_VOLUME`
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
    }

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    pub fn cycle_repeat(&mut self) {
        self.repeat = self.repeat.next();
    }

    /// Append to the end of the queue
    pub fn enqueue(&mut self, track_id: TrackId) {
        self.queue_track_ids.push(track_id);
    }
}

/// Playback state with its track references resolved
///
/// References that no longer resolve are dropped: `current_track` becomes
/// `None` and missing queue entries are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackView {
    #[serde(flatten)]
    pub state: PlaybackState,

    pub current_track: Option<Track>,

    pub queue: Vec<Track>,
}

impl PlaybackView {
    /// Resolve a state's references with `lookup`
    pub fn resolve<F>(state: PlaybackState, mut lookup: F) -> Self
    where
        F: FnMut(&TrackId) -> Option<Track>,
    {
        let current_track = state.current_track_id.as_ref().and_then(&mut lookup);
        let queue = state.queue_track_ids.iter().filter_map(&mut lookup).collect();

        Self {
            state,
            current_track,
            queue,
        }
    }
}
