//! Cadence Storage
//!
//! Multi-user `SQLite` persistence for Cadence.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each record family owns its own queries
//!   (`tracks`, `library`, `playlists`, `recently_played`, `playback_state`, `users`)
//! - **Soft References**: Track references are not foreign keys; readers skip
//!   references that no longer resolve
//! - **Caller Context**: [`LocalStorageContext`] binds a pool to an optional
//!   caller and implements the `StorageContext` trait on top of the slices
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_storage::{LocalStorageContext, create_pool, run_migrations};
//! use cadence_core::storage::StorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://cadence.db").await?;
//! run_migrations(&pool).await?;
//!
//! // Catalog reads need no caller
//! let storage = LocalStorageContext::anonymous(pool);
//! storage.seed_catalog().await?;
//! let popular = storage.get_popular_tracks().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod library;
pub mod playback_state;
pub mod playlists;
pub mod recently_played;
pub mod tracks;
pub mod users;

pub use context::LocalStorageContext;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use sqlx::{Sqlite, Transaction};

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://cadence.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::info!("SQLite pool ready");

    Ok(pool)
}

/// Begin a transaction that holds the write lock from its first statement
///
/// Read-then-write transactions must start this way. A deferred one fails
/// its lock upgrade with `SQLITE_BUSY` when another writer got in first, and
/// the busy timeout does not apply to that case.
pub(crate) async fn begin_write(
    pool: &SqlitePool,
) -> cadence_core::error::Result<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

/// Current time as Unix epoch milliseconds
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
