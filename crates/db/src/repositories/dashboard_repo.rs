//! Repository for the `dashboards` table.

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use vigil_core::dashboard::{DashboardChanges, NewDashboard};
use vigil_core::types::DbId;

use crate::models::dashboard::{Dashboard, DashboardDetail};
use crate::repositories::{DashboardShareRepo, ShareTable, WidgetRepo};

/// Column list for `dashboards` queries.
const COLUMNS: &str = "id, name, user_id, private, created_at, updated_at";

/// Provides batch reads and writes for dashboards.
pub struct DashboardRepo;

impl DashboardRepo {
    /// List every dashboard, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dashboard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dashboards ORDER BY name, id");
        sqlx::query_as::<_, Dashboard>(&query).fetch_all(pool).await
    }

    /// Fetch the dashboards with the given ids. Unknown ids are skipped.
    pub async fn find_by_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<Dashboard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dashboards WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Dashboard>(&query)
            .bind(ids)
            .fetch_all(conn)
            .await
    }

    /// Load one dashboard with its grants and widgets.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DashboardDetail>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let Some(dashboard) = Self::find_by_ids(&mut conn, &[id]).await?.pop() else {
            return Ok(None);
        };

        let users = DashboardShareRepo::list_for_dashboards(&mut conn, ShareTable::Users, &[id]).await?;
        let user_groups =
            DashboardShareRepo::list_for_dashboards(&mut conn, ShareTable::UserGroups, &[id]).await?;
        let widgets = WidgetRepo::list_for_dashboards(&mut conn, &[id]).await?;

        Ok(Some(DashboardDetail {
            dashboard,
            users,
            user_groups,
            widgets,
        }))
    }

    /// Return those of `names` that are already taken (exact match).
    pub async fn existing_names(
        conn: &mut PgConnection,
        names: &[&str],
    ) -> Result<Vec<String>, sqlx::Error> {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        sqlx::query_scalar::<_, String>("SELECT name FROM dashboards WHERE name = ANY($1) ORDER BY name")
            .bind(&names)
            .fetch_all(conn)
            .await
    }

    /// Insert dashboard rows in one statement.
    ///
    /// Returns the new rows in input order.
    pub async fn insert_many(
        conn: &mut PgConnection,
        dashboards: &[NewDashboard],
    ) -> Result<Vec<Dashboard>, sqlx::Error> {
        if dashboards.is_empty() {
            return Ok(Vec::new());
        }

        let names: Vec<String> = dashboards.iter().map(|d| d.name.clone()).collect();
        let owners: Vec<DbId> = dashboards.iter().map(|d| d.owner_id).collect();
        let private: Vec<i16> = dashboards.iter().map(|d| d.sharing.code()).collect();

        let query = format!(
            "INSERT INTO dashboards (name, user_id, private) \
             SELECT * FROM UNNEST($1::text[], $2::bigint[], $3::smallint[]) \
             RETURNING {COLUMNS}"
        );
        let rows = sqlx::query_as::<_, Dashboard>(&query)
            .bind(&names)
            .bind(&owners)
            .bind(&private)
            .fetch_all(conn)
            .await?;
        tracing::debug!(count = rows.len(), "Inserted dashboards");

        // RETURNING order is not guaranteed; names are unique.
        let mut by_name: HashMap<String, Dashboard> =
            rows.into_iter().map(|row| (row.name.clone(), row)).collect();
        Ok(names.iter().filter_map(|name| by_name.remove(name)).collect())
    }

    /// Apply scalar changes to several dashboards in one statement.
    ///
    /// `None` fields keep their stored value.
    pub async fn update_many(
        conn: &mut PgConnection,
        changes: &[(DbId, DashboardChanges)],
    ) -> Result<u64, sqlx::Error> {
        if changes.is_empty() {
            return Ok(0);
        }

        let ids: Vec<DbId> = changes.iter().map(|(id, _)| *id).collect();
        let names: Vec<Option<String>> = changes.iter().map(|(_, c)| c.name.clone()).collect();
        let owners: Vec<Option<DbId>> = changes.iter().map(|(_, c)| c.owner_id).collect();
        let private: Vec<Option<i16>> = changes
            .iter()
            .map(|(_, c)| c.sharing.map(|s| s.code()))
            .collect();

        let result = sqlx::query(
            "UPDATE dashboards d \
             SET name = COALESCE(u.name, d.name), \
                 user_id = COALESCE(u.user_id, d.user_id), \
                 private = COALESCE(u.private, d.private) \
             FROM UNNEST($1::bigint[], $2::text[], $3::bigint[], $4::smallint[]) \
                 AS u(id, name, user_id, private) \
             WHERE d.id = u.id",
        )
        .bind(&ids)
        .bind(&names)
        .bind(&owners)
        .bind(&private)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete dashboards by id. Child rows go with them via `ON DELETE CASCADE`.
    pub async fn delete_many(conn: &mut PgConnection, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dashboards WHERE id = ANY($1)")
            .bind(ids)
            .execute(conn)
            .await?;
        tracing::debug!(count = result.rows_affected(), "Deleted dashboards");
        Ok(result.rows_affected())
    }
}
