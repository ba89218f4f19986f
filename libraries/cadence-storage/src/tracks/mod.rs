//! Catalog queries

mod demo;

pub use demo::DEMO_TRACKS;

use cadence_core::{error::Result, types::*, CadenceError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use std::collections::HashMap;

/// Number of tracks returned by [`get_popular`]
pub const POPULAR_LIMIT: i64 = 10;

/// Track columns, aliased so joined queries decode the same way
pub(crate) const TRACK_COLUMNS: &str = "t.id AS id, t.title AS title, t.artist AS artist, \
     t.album AS album, t.album_art AS album_art, t.duration_seconds AS duration_seconds, \
     t.genre AS genre, t.plays AS plays, t.created_at AS created_at";

pub(crate) fn track_from_row(row: &SqliteRow) -> Result<Track> {
    Ok(Track {
        id: TrackId::new(row.try_get::<String, _>("id")?),
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        album: row.try_get("album")?,
        album_art: row.try_get("album_art")?,
        duration_seconds: row.try_get("duration_seconds")?,
        genre: row.try_get("genre")?,
        plays: row.try_get("plays")?,
        created_at: row.try_get("created_at")?,
    })
}

/// All tracks, newest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let sql = format!("SELECT {TRACK_COLUMNS} FROM tracks t ORDER BY t.created_at DESC, t.rowid DESC");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(track_from_row).collect()
}

/// Top tracks by play count; ties keep catalog order
pub async fn get_popular(pool: &SqlitePool) -> Result<Vec<Track>> {
    let sql = format!(
        "SELECT {TRACK_COLUMNS} FROM tracks t ORDER BY t.plays DESC, t.rowid ASC LIMIT ?"
    );
    let rows = sqlx::query(&sql).bind(POPULAR_LIMIT).fetch_all(pool).await?;

    rows.iter().map(track_from_row).collect()
}

/// Tracks whose genre equals `genre` exactly
pub async fn get_by_genre(pool: &SqlitePool, genre: &str) -> Result<Vec<Track>> {
    let sql = format!("SELECT {TRACK_COLUMNS} FROM tracks t WHERE t.genre = ? ORDER BY t.rowid");
    let rows = sqlx::query(&sql).bind(genre).fetch_all(pool).await?;

    rows.iter().map(track_from_row).collect()
}

/// Case-insensitive substring search on title, artist and album
///
/// The match runs in Rust so that casing follows Unicode rules rather than
/// SQLite's ASCII-only `lower()`.
pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Track>> {
    let needle = query.to_lowercase();
    let sql = format!("SELECT {TRACK_COLUMNS} FROM tracks t ORDER BY t.rowid");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    let mut matches = Vec::new();
    for row in &rows {
        let track = track_from_row(row)?;
        if track.matches_lowercase(&needle) {
            matches.push(track);
        }
    }
    Ok(matches)
}

/// Distinct genres in the order they first appear in the catalog
pub async fn get_genres(pool: &SqlitePool) -> Result<Vec<String>> {
    let rows = sqlx::query("SELECT genre FROM tracks GROUP BY genre ORDER BY MIN(rowid)")
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| row.try_get::<String, _>("genre").map_err(CadenceError::from))
        .collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: &TrackId) -> Result<Option<Track>> {
    let sql = format!("SELECT {TRACK_COLUMNS} FROM tracks t WHERE t.id = ?");
    let row = sqlx::query(&sql)
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(track_from_row).transpose()
}

/// Fetch several tracks at once, keyed by id. Unknown ids are simply absent.
pub async fn get_many(pool: &SqlitePool, ids: &[TrackId]) -> Result<HashMap<TrackId, Track>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT {TRACK_COLUMNS} FROM tracks t WHERE t.id IN ({placeholders})");

    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id.as_str());
    }
    let rows = query.fetch_all(pool).await?;

    rows.iter()
        .map(|row| track_from_row(row).map(|track| (track.id.clone(), track)))
        .collect()
}

pub async fn create(pool: &SqlitePool, track: CreateTrack) -> Result<Track> {
    let mut conn = pool.acquire().await?;
    insert(&mut *conn, track, crate::now_millis()).await
}

pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    track: CreateTrack,
    created_at: i64,
) -> Result<Track> {
    let id = TrackId::generate();

    sqlx::query(
        "INSERT INTO tracks (id, title, artist, album, album_art, duration_seconds, genre, plays, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id.as_str())
    .bind(&track.title)
    .bind(&track.artist)
    .bind(&track.album)
    .bind(&track.album_art)
    .bind(track.duration_seconds)
    .bind(&track.genre)
    .bind(track.plays)
    .bind(created_at)
    .execute(&mut *conn)
    .await?;

    Ok(Track {
        id,
        title: track.title,
        artist: track.artist,
        album: track.album,
        album_art: track.album_art,
        duration_seconds: track.duration_seconds,
        genre: track.genre,
        plays: track.plays,
        created_at,
    })
}

/// Insert the demo catalog, but only into an empty catalog
pub async fn seed(pool: &SqlitePool) -> Result<SeedOutcome> {
    let mut tx = crate::begin_write(pool).await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        return Ok(SeedOutcome {
            seeded: false,
            message: "Tracks already exist".to_string(),
        });
    }

    let now = crate::now_millis();
    for demo in DEMO_TRACKS {
        insert(&mut *tx, demo.to_create_track(), now).await?;
    }

    tx.commit().await?;

    tracing::info!(count = DEMO_TRACKS.len(), "Seeded demo catalog");

    Ok(SeedOutcome {
        seeded: true,
        message: format!("Seeded {} tracks", DEMO_TRACKS.len()),
    })
}

/// Add one to a track's play counter
pub async fn increment_plays(pool: &SqlitePool, id: &TrackId) -> Result<()> {
    let result = sqlx::query("UPDATE tracks SET plays = plays + 1 WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CadenceError::TrackNotFound(id.clone()));
    }

    Ok(())
}
