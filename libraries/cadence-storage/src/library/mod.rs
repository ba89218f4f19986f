//! Per-user saved tracks

use crate::tracks::{track_from_row, TRACK_COLUMNS};
use cadence_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

/// Saved tracks for a user, newest first
///
/// Entries whose track has been removed from the catalog drop out of the join.
pub async fn get(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<LibraryTrack>> {
    let sql = format!(
        "SELECT {TRACK_COLUMNS}, l.id AS library_id, l.added_at AS added_at
         FROM library l
         INNER JOIN tracks t ON t.id = l.track_id
         WHERE l.user_id = ?
         ORDER BY l.added_at DESC, l.rowid DESC"
    );
    let rows = sqlx::query(&sql)
        .bind(user_id.as_str())
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| {
            Ok(LibraryTrack {
                track: track_from_row(row)?,
                added_at: row.try_get("added_at")?,
                library_id: LibraryEntryId::new(row.try_get::<String, _>("library_id")?),
            })
        })
        .collect()
}

pub async fn find(
    pool: &SqlitePool,
    user_id: &UserId,
    track_id: &TrackId,
) -> Result<Option<LibraryEntry>> {
    let row = sqlx::query(
        "SELECT id, user_id, track_id, added_at FROM library
         WHERE user_id = ? AND track_id = ?
         LIMIT 1",
    )
    .bind(user_id.as_str())
    .bind(track_id.as_str())
    .fetch_optional(pool)
    .await?;

    row.map(|row| {
        Ok(LibraryEntry {
            id: LibraryEntryId::new(row.try_get::<String, _>("id")?),
            user_id: UserId::new(row.try_get::<String, _>("user_id")?),
            track_id: TrackId::new(row.try_get::<String, _>("track_id")?),
            added_at: row.try_get("added_at")?,
        })
    })
    .transpose()
}

pub async fn is_in_library(pool: &SqlitePool, user_id: &UserId, track_id: &TrackId) -> Result<bool> {
    Ok(find(pool, user_id, track_id).await?.is_some())
}

/// Save a track for a user
///
/// Returns the id of the existing entry when the track is already saved.
pub async fn add(pool: &SqlitePool, user_id: &UserId, track_id: &TrackId) -> Result<LibraryEntryId> {
    let mut tx = crate::begin_write(pool).await?;

    let existing: Option<String> =
        sqlx::query_scalar("SELECT id FROM library WHERE user_id = ? AND track_id = ? LIMIT 1")
            .bind(user_id.as_str())
            .bind(track_id.as_str())
            .fetch_optional(&mut *tx)
            .await?;

    if let Some(id) = existing {
        return Ok(LibraryEntryId::new(id));
    }

    let id = LibraryEntryId::generate();
    sqlx::query("INSERT INTO library (id, user_id, track_id, added_at) VALUES (?, ?, ?, ?)")
        .bind(id.as_str())
        .bind(user_id.as_str())
        .bind(track_id.as_str())
        .bind(crate::now_millis())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(id)
}

/// Remove a saved track; nothing happens when it is not saved
pub async fn remove(pool: &SqlitePool, user_id: &UserId, track_id: &TrackId) -> Result<()> {
    sqlx::query("DELETE FROM library WHERE user_id = ? AND track_id = ?")
        .bind(user_id.as_str())
        .bind(track_id.as_str())
        .execute(pool)
        .await?;

    Ok(())
}
