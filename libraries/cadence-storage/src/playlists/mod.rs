//! Playlists and their ordered track membership

use crate::tracks::{track_from_row, TRACK_COLUMNS};
use cadence_core::{error::Result, types::*, CadenceError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

fn playlist_from_row(row: &SqliteRow) -> Result<Playlist> {
    Ok(Playlist {
        id: PlaylistId::new(row.try_get::<String, _>("id")?),
        owner_id: UserId::new(row.try_get::<String, _>("owner_id")?),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        is_public: row.try_get::<i64, _>("is_public")? != 0,
        created_at: row.try_get("created_at")?,
    })
}

pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        "SELECT id, owner_id, name, description, is_public, created_at
         FROM playlists WHERE id = ?",
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(playlist_from_row).transpose()
}

/// Playlists owned by `owner`, newest first, each with its membership count
pub async fn get_user_playlists(pool: &SqlitePool, owner: &UserId) -> Result<Vec<PlaylistSummary>> {
    let rows = sqlx::query(
        r#"
        SELECT
            p.id, p.owner_id, p.name, p.description, p.is_public, p.created_at,
            (SELECT COUNT(*) FROM playlist_tracks pt WHERE pt.playlist_id = p.id) AS track_count
        FROM playlists p
        WHERE p.owner_id = ?
        ORDER BY p.created_at DESC, p.rowid DESC
        "#,
    )
    .bind(owner.as_str())
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(PlaylistSummary {
                playlist: playlist_from_row(row)?,
                track_count: row.try_get("track_count")?,
            })
        })
        .collect()
}

/// Tracks of a playlist ordered by position
///
/// Private playlists are only readable by their owner; anyone else (and a
/// caller without identity) gets an empty list, as for an unknown playlist.
pub async fn get_tracks(
    pool: &SqlitePool,
    caller: Option<&UserId>,
    playlist_id: &PlaylistId,
) -> Result<Vec<PlaylistTrack>> {
    let Some(playlist) = get_by_id(pool, playlist_id).await? else {
        return Ok(Vec::new());
    };

    if !playlist.is_visible_to(caller) {
        return Ok(Vec::new());
    }

    let sql = format!(
        "SELECT {TRACK_COLUMNS}, pt.position AS position
         FROM playlist_tracks pt
         INNER JOIN tracks t ON t.id = pt.track_id
         WHERE pt.playlist_id = ?
         ORDER BY pt.position, pt.rowid"
    );
    let rows = sqlx::query(&sql)
        .bind(playlist_id.as_str())
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| {
            Ok(PlaylistTrack {
                track: track_from_row(row)?,
                position: row.try_get("position")?,
            })
        })
        .collect()
}

/// Create a private playlist owned by `owner`
pub async fn create(pool: &SqlitePool, owner: &UserId, playlist: CreatePlaylist) -> Result<PlaylistId> {
    let id = PlaylistId::generate();

    sqlx::query(
        "INSERT INTO playlists (id, owner_id, name, description, is_public, created_at)
         VALUES (?, ?, ?, ?, 0, ?)",
    )
    .bind(id.as_str())
    .bind(owner.as_str())
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(crate::now_millis())
    .execute(pool)
    .await?;

    tracing::debug!(playlist_id = %id, owner = %owner, "Created playlist");

    Ok(id)
}

/// Ownership check shared by every playlist mutation
///
/// A playlist owned by someone else is reported exactly like a missing one.
async fn require_owned(
    conn: &mut SqliteConnection,
    playlist_id: &PlaylistId,
    owner: &UserId,
) -> Result<()> {
    let owner_id: Option<String> = sqlx::query_scalar("SELECT owner_id FROM playlists WHERE id = ?")
        .bind(playlist_id.as_str())
        .fetch_optional(&mut *conn)
        .await?;

    match owner_id {
        Some(id) if id == owner.as_str() => Ok(()),
        _ => Err(CadenceError::PlaylistNotFound(playlist_id.clone())),
    }
}

/// Append a track to a playlist
///
/// Adding a track that is already a member returns the existing membership.
/// New members get the current membership count as their position.
pub async fn add_track(
    pool: &SqlitePool,
    owner: &UserId,
    playlist_id: &PlaylistId,
    track_id: &TrackId,
) -> Result<PlaylistTrackId> {
    let mut tx = crate::begin_write(pool).await?;

    require_owned(&mut *tx, playlist_id, owner).await?;

    let existing: Option<String> = sqlx::query_scalar(
        "SELECT id FROM playlist_tracks WHERE playlist_id = ? AND track_id = ? LIMIT 1",
    )
    .bind(playlist_id.as_str())
    .bind(track_id.as_str())
    .fetch_optional(&mut *tx)
    .await?;

    if let Some(id) = existing {
        return Ok(PlaylistTrackId::new(id));
    }

    let position: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM playlist_tracks WHERE playlist_id = ?")
        .bind(playlist_id.as_str())
        .fetch_one(&mut *tx)
        .await?;

    let id = PlaylistTrackId::generate();
    sqlx::query(
        "INSERT INTO playlist_tracks (id, playlist_id, track_id, position, added_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id.as_str())
    .bind(playlist_id.as_str())
    .bind(track_id.as_str())
    .bind(position)
    .bind(crate::now_millis())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(id)
}

/// Remove one membership row for `track_id`; remaining positions are kept
pub async fn remove_track(
    pool: &SqlitePool,
    owner: &UserId,
    playlist_id: &PlaylistId,
    track_id: &TrackId,
) -> Result<()> {
    let mut tx = crate::begin_write(pool).await?;

    require_owned(&mut *tx, playlist_id, owner).await?;

    sqlx::query(
        "DELETE FROM playlist_tracks WHERE id = (
             SELECT id FROM playlist_tracks
             WHERE playlist_id = ? AND track_id = ?
             ORDER BY position
             LIMIT 1
         )",
    )
    .bind(playlist_id.as_str())
    .bind(track_id.as_str())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Delete a playlist and all of its memberships
pub async fn delete(pool: &SqlitePool, owner: &UserId, playlist_id: &PlaylistId) -> Result<()> {
    let mut tx = crate::begin_write(pool).await?;

    require_owned(&mut *tx, playlist_id, owner).await?;

    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ?")
        .bind(playlist_id.as_str())
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(playlist_id.as_str())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::debug!(playlist_id = %playlist_id, "Deleted playlist");

    Ok(())
}
