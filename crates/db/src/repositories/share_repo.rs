//! Repository for the `dashboard_users` and `dashboard_user_groups` tables.
//!
//! The two grant tables differ only in the name of their target column, so
//! one repository serves both, selected by [`ShareTable`].

use sqlx::PgConnection;
use vigil_core::dashboard::sync::ShareSyncPlan;
use vigil_core::types::DbId;

use crate::models::share::DashboardShare;

/// Which grant table to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTable {
    Users,
    UserGroups,
}

impl ShareTable {
    fn table(&self) -> &'static str {
        match self {
            Self::Users => "dashboard_users",
            Self::UserGroups => "dashboard_user_groups",
        }
    }

    fn target_column(&self) -> &'static str {
        match self {
            Self::Users => "user_id",
            Self::UserGroups => "user_group_id",
        }
    }
}

pub struct DashboardShareRepo;

impl DashboardShareRepo {
    /// All grants of the given dashboards, ordered by dashboard then target.
    pub async fn list_for_dashboards(
        conn: &mut PgConnection,
        table: ShareTable,
        dashboard_ids: &[DbId],
    ) -> Result<Vec<DashboardShare>, sqlx::Error> {
        let query = format!(
            "SELECT id, dashboard_id, {target} AS target_id, permission \
             FROM {table} WHERE dashboard_id = ANY($1) \
             ORDER BY dashboard_id, {target}",
            target = table.target_column(),
            table = table.table(),
        );
        sqlx::query_as::<_, DashboardShare>(&query)
            .bind(dashboard_ids)
            .fetch_all(conn)
            .await
    }

    /// Apply a sync plan: deletes, then permission patches, then inserts.
    ///
    /// Each non-empty step is a single statement.
    pub async fn apply(
        conn: &mut PgConnection,
        table: ShareTable,
        plan: &ShareSyncPlan,
    ) -> Result<(), sqlx::Error> {
        let name = table.table();

        if !plan.deletes.is_empty() {
            sqlx::query(&format!("DELETE FROM {name} WHERE id = ANY($1)"))
                .bind(&plan.deletes)
                .execute(&mut *conn)
                .await?;
        }

        if !plan.patches.is_empty() {
            let ids: Vec<DbId> = plan.patches.iter().map(|p| p.id).collect();
            let permissions: Vec<i16> = plan.patches.iter().map(|p| p.permission.code()).collect();
            sqlx::query(&format!(
                "UPDATE {name} t SET permission = u.permission \
                 FROM UNNEST($1::bigint[], $2::smallint[]) AS u(id, permission) \
                 WHERE t.id = u.id"
            ))
            .bind(&ids)
            .bind(&permissions)
            .execute(&mut *conn)
            .await?;
        }

        if !plan.inserts.is_empty() {
            let dashboard_ids: Vec<DbId> = plan.inserts.iter().map(|s| s.dashboard_id).collect();
            let targets: Vec<DbId> = plan.inserts.iter().map(|s| s.target_id).collect();
            let permissions: Vec<i16> = plan.inserts.iter().map(|s| s.permission.code()).collect();
            sqlx::query(&format!(
                "INSERT INTO {name} (dashboard_id, {target}, permission) \
                 SELECT * FROM UNNEST($1::bigint[], $2::bigint[], $3::smallint[])",
                target = table.target_column(),
            ))
            .bind(&dashboard_ids)
            .bind(&targets)
            .bind(&permissions)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}
