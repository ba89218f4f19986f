//! Per-user transport record
//!
//! The record is created by the first `play` and afterwards only patched.
//! Every mutation runs as one transaction: load, apply the transition from
//! [`PlaybackState`], save. Concurrent writers are last-write-wins.

use crate::{recently_played, tracks};
use cadence_core::{error::Result, types::*, CadenceError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

const STATE_COLUMNS: &str = "id, user_id, current_track_id, is_playing, progress_seconds, \
     volume, shuffle, repeat_mode, queue_json, updated_at";

fn state_from_row(row: &SqliteRow) -> Result<PlaybackState> {
    let queue_json: String = row.try_get("queue_json")?;
    let queue_track_ids: Vec<TrackId> = serde_json::from_str(&queue_json)?;
    let repeat_mode: String = row.try_get("repeat_mode")?;
    let repeat = RepeatMode::parse(&repeat_mode)
        .ok_or_else(|| CadenceError::storage(format!("Unknown repeat mode '{repeat_mode}'")))?;

    Ok(PlaybackState {
        id: PlaybackStateId::new(row.try_get::<String, _>("id")?),
        user_id: UserId::new(row.try_get::<String, _>("user_id")?),
        current_track_id: row
            .try_get::<Option<String>, _>("current_track_id")?
            .map(TrackId::new),
        is_playing: row.try_get::<i64, _>("is_playing")? != 0,
        progress_seconds: row.try_get("progress_seconds")?,
        volume: row.try_get("volume")?,
        shuffle: row.try_get::<i64, _>("shuffle")? != 0,
        repeat,
        queue_track_ids,
        updated_at: row.try_get("updated_at")?,
    })
}

async fn load(conn: &mut SqliteConnection, user_id: &UserId) -> Result<Option<PlaybackState>> {
    let sql = format!("SELECT {STATE_COLUMNS} FROM playback_state WHERE user_id = ?");
    let row = sqlx::query(&sql)
        .bind(user_id.as_str())
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(state_from_row).transpose()
}

async fn save(conn: &mut SqliteConnection, state: &PlaybackState) -> Result<()> {
    let queue_json = serde_json::to_string(&state.queue_track_ids)?;

    sqlx::query(
        "INSERT INTO playback_state
         (id, user_id, current_track_id, is_playing, progress_seconds,
          volume, shuffle, repeat_mode, queue_json, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(user_id)
         DO UPDATE SET
            current_track_id = excluded.current_track_id,
            is_playing = excluded.is_playing,
            progress_seconds = excluded.progress_seconds,
            volume = excluded.volume,
            shuffle = excluded.shuffle,
            repeat_mode = excluded.repeat_mode,
            queue_json = excluded.queue_json,
            updated_at = excluded.updated_at",
    )
    .bind(state.id.as_str())
    .bind(state.user_id.as_str())
    .bind(state.current_track_id.as_ref().map(TrackId::as_str))
    .bind(i64::from(state.is_playing))
    .bind(state.progress_seconds)
    .bind(state.volume)
    .bind(i64::from(state.shuffle))
    .bind(state.repeat.as_str())
    .bind(queue_json)
    .bind(state.updated_at)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Current record for a user, if they have ever played anything
pub async fn get(pool: &SqlitePool, user_id: &UserId) -> Result<Option<PlaybackState>> {
    let mut conn = pool.acquire().await?;
    load(&mut *conn, user_id).await
}

/// Current record with track references resolved
pub async fn get_view(pool: &SqlitePool, user_id: &UserId) -> Result<Option<PlaybackView>> {
    let Some(state) = get(pool, user_id).await? else {
        return Ok(None);
    };

    let mut ids = state.queue_track_ids.clone();
    ids.extend(state.current_track_id.iter().cloned());
    let found = tracks::get_many(pool, &ids).await?;

    Ok(Some(PlaybackView::resolve(state, |id| found.get(id).cloned())))
}

/// Start `track_id` for a user
///
/// Always logs the play. Creates the record on first use, otherwise switches
/// track and restarts from zero while keeping volume, shuffle, repeat and
/// queue.
pub async fn play(pool: &SqlitePool, user_id: &UserId, track_id: &TrackId) -> Result<PlaybackStateId> {
    let now = crate::now_millis();
    let mut tx = crate::begin_write(pool).await?;

    recently_played::insert(&mut *tx, user_id, track_id, now).await?;

    let state = match load(&mut *tx, user_id).await? {
        Some(mut state) => {
            state.play(track_id.clone());
            state.updated_at = now;
            state
        }
        None => {
            tracing::debug!(user_id = %user_id, "Creating playback record");
            PlaybackState::started(user_id.clone(), track_id.clone(), now)
        }
    };

    save(&mut *tx, &state).await?;
    tx.commit().await?;

    tracing::debug!(user_id = %user_id, track_id = %track_id, "Playing");

    Ok(state.id)
}

/// Apply `transition` to a user's record and stamp `updated_at`
///
/// Does nothing and returns `None` when the user has no record yet.
pub async fn modify<F>(pool: &SqlitePool, user_id: &UserId, transition: F) -> Result<Option<PlaybackState>>
where
    F: FnOnce(&mut PlaybackState) + Send,
{
    let mut tx = crate::begin_write(pool).await?;

    let Some(mut state) = load(&mut *tx, user_id).await? else {
        return Ok(None);
    };

    transition(&mut state);
    state.updated_at = crate::now_millis();

    save(&mut *tx, &state).await?;
    tx.commit().await?;

    Ok(Some(state))
}

pub async fn pause(pool: &SqlitePool, user_id: &UserId) -> Result<()> {
    modify(pool, user_id, PlaybackState::pause).await?;
    Ok(())
}

pub async fn resume(pool: &SqlitePool, user_id: &UserId) -> Result<()> {
    modify(pool, user_id, PlaybackState::resume).await?;
    Ok(())
}

/// Set the volume; out-of-range values are clamped to 0..=100
pub async fn set_volume(pool: &SqlitePool, user_id: &UserId, volume: i32) -> Result<()> {
    modify(pool, user_id, |state| state.set_volume(volume)).await?;
    Ok(())
}

pub async fn toggle_shuffle(pool: &SqlitePool, user_id: &UserId) -> Result<()> {
    modify(pool, user_id, PlaybackState::toggle_shuffle).await?;
    Ok(())
}

pub async fn cycle_repeat(pool: &SqlitePool, user_id: &UserId) -> Result<()> {
    modify(pool, user_id, PlaybackState::cycle_repeat).await?;
    Ok(())
}

/// Append to the queue; duplicates are kept
pub async fn add_to_queue(pool: &SqlitePool, user_id: &UserId, track_id: &TrackId) -> Result<()> {
    let track_id = track_id.clone();
    modify(pool, user_id, move |state| state.enqueue(track_id)).await?;
    Ok(())
}
