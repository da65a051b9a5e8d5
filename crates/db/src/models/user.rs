//! User and user group row models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vigil_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub user_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    /// Defaults to `user` when omitted.
    pub user_type: Option<String>,
}

/// A row from the `user_groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserGroup {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
