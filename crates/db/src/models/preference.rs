//! Per-user preference rows.

use serde::Serialize;
use sqlx::FromRow;
use vigil_core::types::{DbId, Timestamp};

/// A row from the `user_preferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPreference {
    pub id: DbId,
    pub user_id: DbId,
    pub key: String,
    pub discriminator: DbId,
    pub value_int: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
