//! Fixed demo catalog used by `seed`

use cadence_core::types::CreateTrack;

/// One demo catalog entry
#[derive(Debug, Clone, Copy)]
pub struct DemoTrack {
    pub title: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    pub album_art: &'static str,
    pub duration_seconds: i64,
    pub genre: &'static str,
    pub plays: i64,
}

impl DemoTrack {
    pub fn to_create_track(&self) -> CreateTrack {
        CreateTrack {
            title: self.title.to_string(),
            artist: self.artist.to_string(),
            album: self.album.to_string(),
            album_art: self.album_art.to_string(),
            duration_seconds: self.duration_seconds,
            genre: self.genre.to_string(),
            plays: self.plays,
        }
    }
}

pub const DEMO_TRACKS: &[DemoTrack] = &[
    DemoTrack {
        title: "Midnight Dreams",
        artist: "Luna Waves",
        album: "Nocturnal",
        album_art: "https://images.unsplash.com/photo-1614149162883-504ce4d13909?w=300&h=300&fit=crop",
        duration_seconds: 234,
        genre: "Electronic",
        plays: 2_450_000,
    },
    DemoTrack {
        title: "Golden Hour",
        artist: "Solar Flare",
        album: "Daylight",
        album_art: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=300&h=300&fit=crop",
        duration_seconds: 198,
        genre: "Pop",
        plays: 5_200_000,
    },
    DemoTrack {
        title: "Neon Lights",
        artist: "Synthwave Collective",
        album: "Retro Future",
        album_art: "https://images.unsplash.com/photo-1571330735066-03aaa9429d89?w=300&h=300&fit=crop",
        duration_seconds: 267,
        genre: "Synthwave",
        plays: 1_800_000,
    },
    DemoTrack {
        title: "Ocean Breeze",
        artist: "Coastal Sound",
        album: "Tides",
        album_art: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=300&h=300&fit=crop",
        duration_seconds: 312,
        genre: "Ambient",
        plays: 980_000,
    },
    DemoTrack {
        title: "Urban Jungle",
        artist: "Metro Beats",
        album: "City Life",
        album_art: "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=300&h=300&fit=crop",
        duration_seconds: 245,
        genre: "Hip Hop",
        plays: 3_400_000,
    },
    DemoTrack {
        title: "Starlight Symphony",
        artist: "Celestial Orchestra",
        album: "Cosmos",
        album_art: "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?w=300&h=300&fit=crop",
        duration_seconds: 289,
        genre: "Classical",
        plays: 720_000,
    },
    DemoTrack {
        title: "Electric Soul",
        artist: "Volt",
        album: "Charged",
        album_art: "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?w=300&h=300&fit=crop",
        duration_seconds: 223,
        genre: "R&B",
        plays: 4_100_000,
    },
    DemoTrack {
        title: "Desert Wind",
        artist: "Nomad",
        album: "Wanderer",
        album_art: "https://images.unsplash.com/photo-1508700115892-45ecd05ae2ad?w=300&h=300&fit=crop",
        duration_seconds: 276,
        genre: "World",
        plays: 560_000,
    },
    DemoTrack {
        title: "Velocity",
        artist: "Hyperdrive",
        album: "Fast Lane",
        album_art: "https://images.unsplash.com/photo-1504898770365-14faca6a7320?w=300&h=300&fit=crop",
        duration_seconds: 198,
        genre: "EDM",
        plays: 6_700_000,
    },
    DemoTrack {
        title: "Whisper",
        artist: "Silence Theory",
        album: "Hush",
        album_art: "https://images.unsplash.com/photo-1445985543470-41fba5c3144a?w=300&h=300&fit=crop",
        duration_seconds: 342,
        genre: "Indie",
        plays: 1_200_000,
    },
    DemoTrack {
        title: "Thunder Road",
        artist: "Storm Riders",
        album: "Lightning",
        album_art: "https://images.unsplash.com/photo-1498038432885-c6f3f1b912ee?w=300&h=300&fit=crop",
        duration_seconds: 256,
        genre: "Rock",
        plays: 2_900_000,
    },
    DemoTrack {
        title: "Crystal Clear",
        artist: "Pure Tone",
        album: "Clarity",
        album_art: "https://images.unsplash.com/photo-1487180144351-b8472da7d491?w=300&h=300&fit=crop",
        duration_seconds: 301,
        genre: "Pop",
        plays: 3_800_000,
    },
];
