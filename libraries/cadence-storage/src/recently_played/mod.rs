//! Append-only play log and the recently-played listing built on it

use crate::tracks;
use cadence_core::history::{rank_recently_played, RECENT_WINDOW};
use cadence_core::{error::Result, types::*};
use sqlx::{Row, SqliteConnection, SqlitePool};

pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    user_id: &UserId,
    track_id: &TrackId,
    played_at: i64,
) -> Result<HistoryEntryId> {
    let id = HistoryEntryId::generate();

    sqlx::query("INSERT INTO recently_played (id, user_id, track_id, played_at) VALUES (?, ?, ?, ?)")
        .bind(id.as_str())
        .bind(user_id.as_str())
        .bind(track_id.as_str())
        .bind(played_at)
        .execute(&mut *conn)
        .await?;

    Ok(id)
}

/// Log a play at an explicit time
pub async fn record(
    pool: &SqlitePool,
    user_id: &UserId,
    track_id: &TrackId,
    played_at: i64,
) -> Result<HistoryEntryId> {
    let mut conn = pool.acquire().await?;
    insert(&mut *conn, user_id, track_id, played_at).await
}

/// Raw history entries, newest first
pub async fn recent(pool: &SqlitePool, user_id: &UserId, limit: usize) -> Result<Vec<RecentlyPlayedEntry>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);

    let rows = sqlx::query(
        "SELECT id, user_id, track_id, played_at FROM recently_played
         WHERE user_id = ?
         ORDER BY played_at DESC, rowid DESC
         LIMIT ?",
    )
    .bind(user_id.as_str())
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(RecentlyPlayedEntry {
                id: HistoryEntryId::new(row.try_get::<String, _>("id")?),
                user_id: UserId::new(row.try_get::<String, _>("user_id")?),
                track_id: TrackId::new(row.try_get::<String, _>("track_id")?),
                played_at: row.try_get("played_at")?,
            })
        })
        .collect()
}

/// Deduplicated recent plays with full track data
pub async fn get_recently_played(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<RecentlyPlayedTrack>> {
    let entries = recent(pool, user_id, RECENT_WINDOW).await?;

    let ids: Vec<TrackId> = entries.iter().map(|e| e.track_id.clone()).collect();
    let found = tracks::get_many(pool, &ids).await?;

    Ok(rank_recently_played(&entries, |id| found.get(id).cloned()))
}
