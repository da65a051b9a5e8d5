//! Repositories for the `users` and `user_groups` tables.

use sqlx::{PgConnection, PgPool};
use vigil_core::roles::ROLE_USER;
use vigil_core::types::DbId;

use crate::models::user::{CreateUser, User, UserGroup};

const USER_COLUMNS: &str = "id, username, user_type, created_at, updated_at";
const GROUP_COLUMNS: &str = "id, name, created_at, updated_at";

pub struct UserRepo;

impl UserRepo {
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, user_type) VALUES ($1, $2) RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(input.user_type.as_deref().unwrap_or(ROLE_USER))
            .fetch_one(pool)
            .await
    }

    /// Return those of `ids` that exist, as seen by `conn`.
    pub async fn existing_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_scalar::<_, DbId>("SELECT id FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(conn)
            .await
    }
}

pub struct UserGroupRepo;

impl UserGroupRepo {
    pub async fn create(pool: &PgPool, name: &str) -> Result<UserGroup, sqlx::Error> {
        let query = format!("INSERT INTO user_groups (name) VALUES ($1) RETURNING {GROUP_COLUMNS}");
        sqlx::query_as::<_, UserGroup>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Return those of `ids` that exist, as seen by `conn`.
    pub async fn existing_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_scalar::<_, DbId>("SELECT id FROM user_groups WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(conn)
            .await
    }
}
