//! Repository for the `audit_logs` table.

use sqlx::{PgConnection, PgPool};
use vigil_core::types::DbId;

use crate::models::audit::{AuditLog, CreateAuditLog};

/// Column list for `audit_logs` SELECT queries.
const COLUMNS: &str = "\
    id, timestamp, user_id, action_type, entity_type, \
    entity_id, details_json, created_at";

pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append entries in one statement, inside the caller's transaction.
    pub async fn batch_insert(
        conn: &mut PgConnection,
        entries: &[CreateAuditLog],
    ) -> Result<u64, sqlx::Error> {
        if entries.is_empty() {
            return Ok(0);
        }

        let user_ids: Vec<Option<DbId>> = entries.iter().map(|e| e.user_id).collect();
        let actions: Vec<String> = entries.iter().map(|e| e.action_type.clone()).collect();
        let entity_types: Vec<String> = entries.iter().map(|e| e.entity_type.clone()).collect();
        let entity_ids: Vec<Option<DbId>> = entries.iter().map(|e| e.entity_id).collect();
        let details: Vec<Option<serde_json::Value>> =
            entries.iter().map(|e| e.details_json.clone()).collect();

        let result = sqlx::query(
            "INSERT INTO audit_logs \
                (user_id, action_type, entity_type, entity_id, details_json) \
             SELECT * FROM UNNEST($1::bigint[], $2::text[], $3::text[], $4::bigint[], $5::jsonb[])",
        )
        .bind(&user_ids)
        .bind(&actions)
        .bind(&entity_types)
        .bind(&entity_ids)
        .bind(&details)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Entries for one entity, oldest first.
    pub async fn list_for_entity(
        pool: &PgPool,
        entity_type: &str,
        entity_id: DbId,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs \
             WHERE entity_type = $1 AND entity_id = $2 \
             ORDER BY id"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(entity_type)
            .bind(entity_id)
            .fetch_all(pool)
            .await
    }
}
