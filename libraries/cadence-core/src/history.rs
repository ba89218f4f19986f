//! Recently-played ranking
//!
//! History is bounded twice: only the newest [`RECENT_WINDOW`] raw plays are
//! considered, and after deduplication at most [`RECENT_LIMIT`] tracks are
//! returned. Replaying the same few tracks therefore shrinks the list rather
//! than padding it with older plays.

use crate::types::{RecentlyPlayedEntry, RecentlyPlayedTrack, Track, TrackId};
use std::collections::HashSet;

/// Raw history entries read per request
pub const RECENT_WINDOW: usize = 20;

/// Maximum number of distinct tracks returned
pub const RECENT_LIMIT: usize = 8;

/// Rank a newest-first slice of history entries.
///
/// Entries beyond [`RECENT_WINDOW`] are ignored. The first (most recent)
/// occurrence of each track wins. Entries whose track `lookup` cannot
/// resolve are skipped without error, and still count as seen.
pub fn rank_recently_played<F>(entries: &[RecentlyPlayedEntry], mut lookup: F) -> Vec<RecentlyPlayedTrack>
where
    F: FnMut(&TrackId) -> Option<Track>,
{
    let mut seen: HashSet<&TrackId> = HashSet::new();

    entries
        .iter()
        .take(RECENT_WINDOW)
        .filter(|entry| seen.insert(&entry.track_id))
        .filter_map(|entry| {
            lookup(&entry.track_id).map(|track| RecentlyPlayedTrack {
                track,
                played_at: entry.played_at,
            })
        })
        .take(RECENT_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HistoryEntryId, UserId};

    fn track(id: &str) -> Track {
        Track {
            id: TrackId::new(id),
            title: id.to_uppercase(),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            album_art: String::new(),
            duration_seconds: 180,
            genre: "Pop".to_string(),
            plays: 0,
            created_at: 0,
        }
    }

    /// Build newest-first entries from a chronological list of plays
    fn history(chronological: &[&str]) -> Vec<RecentlyPlayedEntry> {
        let mut entries: Vec<RecentlyPlayedEntry> = chronological
            .iter()
            .enumerate()
            .map(|(i, id)| RecentlyPlayedEntry {
                id: HistoryEntryId::generate(),
                user_id: UserId::new("u1"),
                track_id: TrackId::new(*id),
                played_at: i as i64,
            })
            .collect();
        entries.reverse();
        entries
    }

    fn ids(ranked: &[RecentlyPlayedTrack]) -> Vec<&str> {
        ranked.iter().map(|r| r.track.id.as_str()).collect()
    }

    #[test]
    fn most_recent_occurrence_wins() {
        let entries = history(&["a", "b", "a", "c"]);
        let ranked = rank_recently_played(&entries, |id| Some(track(id.as_str())));

        assert_eq!(ids(&ranked), vec!["c", "a", "b"]);
        assert_eq!(ranked[1].played_at, 2);
    }

    #[test]
    fn never_more_than_limit() {
        let plays: Vec<String> = (0..15).map(|i| format!("t{i}")).collect();
        let plays: Vec<&str> = plays.iter().map(String::as_str).collect();
        let ranked = rank_recently_played(&history(&plays), |id| Some(track(id.as_str())));

        assert_eq!(ranked.len(), RECENT_LIMIT);
        assert_eq!(ranked[0].track.id.as_str(), "t14");
    }

    #[test]
    fn replays_do_not_pull_in_older_tracks() {
        // Five old distinct tracks, then 20 replays of three tracks
        let mut plays = vec!["old1", "old2", "old3", "old4", "old5"];
        for _ in 0..7 {
            plays.extend(["x", "y", "z"]);
        }
        let ranked = rank_recently_played(&history(&plays), |id| Some(track(id.as_str())));

        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| !r.track.id.as_str().starts_with("old")));
    }

    #[test]
    fn only_the_newest_twenty_are_considered() {
        // 21 plays: the oldest one falls outside the window
        let mut plays = vec!["first"];
        for i in 0..20 {
            plays.push(if i % 2 == 0 { "a" } else { "b" });
        }
        let ranked = rank_recently_played(&history(&plays), |id| Some(track(id.as_str())));

        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn missing_tracks_are_skipped() {
        let entries = history(&["a", "deleted", "b"]);
        let ranked = rank_recently_played(&entries, |id| {
            (id.as_str() != "deleted").then(|| track(id.as_str()))
        });

        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn no_duplicates_in_output() {
        let entries = history(&["a", "b", "a", "b", "a", "c", "a", "d"]);
        let ranked = rank_recently_played(&entries, |id| Some(track(id.as_str())));

        let unique: HashSet<&str> = ids(&ranked).into_iter().collect();
        assert_eq!(unique.len(), ranked.len());
    }

    #[test]
    fn empty_history_ranks_empty() {
        let ranked = rank_recently_played(&[], |id| Some(track(id.as_str())));
        assert!(ranked.is_empty());
    }
}
