/// User domain type
use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name, unique across accounts
    pub name: String,

    /// Account creation timestamp (Unix epoch milliseconds)
    pub created_at: i64,
}
