//! User accounts and password credentials

use cadence_core::{error::Result, types::*, CadenceError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

fn user_from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: UserId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Create a user with a unique name
///
/// # Errors
///
/// Returns [`CadenceError::Duplicate`] when the name is already taken
pub async fn create(pool: &SqlitePool, name: &str) -> Result<User> {
    let mut tx = crate::begin_write(pool).await?;

    let taken: Option<String> = sqlx::query_scalar("SELECT id FROM users WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *tx)
        .await?;

    if taken.is_some() {
        return Err(CadenceError::Duplicate(format!("User '{name}' already exists")));
    }

    let user = User {
        id: UserId::generate(),
        name: name.to_string(),
        created_at: crate::now_millis(),
    };

    sqlx::query("INSERT INTO users (id, name, created_at) VALUES (?, ?, ?)")
        .bind(user.id.as_str())
        .bind(&user.name)
        .bind(user.created_at)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(user_id = %user.id, name = %user.name, "Created user");

    Ok(user)
}

/// Create a guest user with a generated name and no credential
pub async fn create_anonymous(pool: &SqlitePool) -> Result<User> {
    let id = UserId::generate();
    let suffix: String = id.as_str().chars().take(8).collect();
    create(pool, &format!("guest-{suffix}")).await
}

pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, created_at FROM users WHERE id = ?")
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, created_at FROM users WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, created_at FROM users ORDER BY name")
        .fetch_all(pool)
        .await?;

    rows.iter().map(user_from_row).collect()
}

/// Get a user's password hash for authentication
///
/// Returns `None` for users without credentials (guests).
pub async fn get_password_hash(pool: &SqlitePool, user_id: &UserId) -> Result<Option<String>> {
    let hash = sqlx::query_scalar("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id.as_str())
        .fetch_optional(pool)
        .await?;

    Ok(hash)
}

/// Create or update user credentials
///
/// `password_hash` must already be hashed.
pub async fn set_password_hash(pool: &SqlitePool, user_id: &UserId, password_hash: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(user_id)
         DO UPDATE SET password_hash = excluded.password_hash, updated_at = excluded.updated_at",
    )
    .bind(user_id.as_str())
    .bind(password_hash)
    .bind(crate::now_millis())
    .execute(pool)
    .await?;

    Ok(())
}
