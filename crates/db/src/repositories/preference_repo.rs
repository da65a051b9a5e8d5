//! Repository for the `user_preferences` table.

use sqlx::PgPool;
use vigil_core::types::DbId;

use crate::models::preference::UserPreference;

const COLUMNS: &str = "id, user_id, key, discriminator, value_int, created_at, updated_at";

/// Integer preferences keyed by `(user_id, key, discriminator)`.
pub struct PreferenceRepo;

impl PreferenceRepo {
    /// Stored integer for the key, or `None` if the user never set it.
    pub async fn get_int(
        pool: &PgPool,
        user_id: DbId,
        key: &str,
        discriminator: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "SELECT value_int FROM user_preferences \
             WHERE user_id = $1 AND key = $2 AND discriminator = $3",
        )
        .bind(user_id)
        .bind(key)
        .bind(discriminator)
        .fetch_optional(pool)
        .await
    }

    /// Insert or overwrite the integer for the key.
    pub async fn set_int(
        pool: &PgPool,
        user_id: DbId,
        key: &str,
        discriminator: DbId,
        value: i32,
    ) -> Result<UserPreference, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_preferences (user_id, key, discriminator, value_int) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, key, discriminator) DO UPDATE \
             SET value_int = EXCLUDED.value_int \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPreference>(&query)
            .bind(user_id)
            .bind(key)
            .bind(discriminator)
            .bind(value)
            .fetch_one(pool)
            .await
    }
}
