//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and indexes.

#![allow(dead_code)]

use cadence_core::types::*;
use cadence_storage::LocalStorageContext;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = cadence_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        cadence_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Storage context acting as `user_id`
    pub fn context_for(&self, user_id: &UserId) -> LocalStorageContext {
        LocalStorageContext::for_user(self.pool.clone(), user_id.clone())
    }

    /// Storage context without a caller
    pub fn anonymous_context(&self) -> LocalStorageContext {
        LocalStorageContext::anonymous(self.pool.clone())
    }
}

/// Test fixture: Create a test user
pub async fn create_test_user(pool: &SqlitePool, name: &str) -> UserId {
    cadence_storage::users::create(pool, name)
        .await
        .expect("Failed to create test user")
        .id
}

/// Test fixture: Create a test track
pub async fn create_test_track(pool: &SqlitePool, title: &str, genre: &str, plays: i64) -> TrackId {
    cadence_storage::tracks::create(
        pool,
        CreateTrack {
            title: title.to_string(),
            artist: format!("{title} Artist"),
            album: format!("{title} Album"),
            album_art: String::new(),
            duration_seconds: 200,
            genre: genre.to_string(),
            plays,
        },
    )
    .await
    .expect("Failed to create test track")
    .id
}

/// Test fixture: Create a playlist owned by `owner`
pub async fn create_test_playlist(pool: &SqlitePool, owner: &UserId, name: &str) -> PlaylistId {
    cadence_storage::playlists::create(
        pool,
        owner,
        CreatePlaylist {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .expect("Failed to create test playlist")
}

/// Remove a track from the catalog behind the back of every reference to it
pub async fn delete_track(pool: &SqlitePool, track_id: &TrackId) {
    sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(track_id.as_str())
        .execute(pool)
        .await
        .expect("Failed to delete track");
}

/// Flip a playlist to public
pub async fn make_public(pool: &SqlitePool, playlist_id: &PlaylistId) {
    sqlx::query("UPDATE playlists SET is_public = 1 WHERE id = ?")
        .bind(playlist_id.as_str())
        .execute(pool)
        .await
        .expect("Failed to publish playlist");
}
