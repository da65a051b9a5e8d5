//! Repository for the `widgets` table.

use sqlx::PgConnection;
use vigil_core::dashboard::sync::WidgetSyncPlan;
use vigil_core::types::DbId;

use crate::models::widget::Widget;

/// Column list for `widgets` queries.
const COLUMNS: &str = "id, dashboard_id, widget_type, name, grid_row, grid_col, height, width";

pub struct WidgetRepo;

impl WidgetRepo {
    /// All widgets of the given dashboards in grid order.
    pub async fn list_for_dashboards(
        conn: &mut PgConnection,
        dashboard_ids: &[DbId],
    ) -> Result<Vec<Widget>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM widgets WHERE dashboard_id = ANY($1) \
             ORDER BY dashboard_id, grid_row, grid_col, id"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(dashboard_ids)
            .fetch_all(conn)
            .await
    }

    /// Apply a sync plan: deletes, then field patches, then inserts.
    pub async fn apply(conn: &mut PgConnection, plan: &WidgetSyncPlan) -> Result<(), sqlx::Error> {
        if !plan.deletes.is_empty() {
            sqlx::query("DELETE FROM widgets WHERE id = ANY($1)")
                .bind(&plan.deletes)
                .execute(&mut *conn)
                .await?;
        }

        if !plan.patches.is_empty() {
            let ids: Vec<DbId> = plan.patches.iter().map(|p| p.id).collect();
            let types: Vec<Option<String>> =
                plan.patches.iter().map(|p| p.changes.widget_type.clone()).collect();
            let names: Vec<Option<String>> =
                plan.patches.iter().map(|p| p.changes.name.clone()).collect();
            let rows: Vec<Option<i32>> = plan.patches.iter().map(|p| p.changes.row).collect();
            let cols: Vec<Option<i32>> = plan.patches.iter().map(|p| p.changes.col).collect();
            let heights: Vec<Option<i32>> = plan.patches.iter().map(|p| p.changes.height).collect();
            let widths: Vec<Option<i32>> = plan.patches.iter().map(|p| p.changes.width).collect();

            sqlx::query(
                "UPDATE widgets w \
                 SET widget_type = COALESCE(u.widget_type, w.widget_type), \
                     name = COALESCE(u.name, w.name), \
                     grid_row = COALESCE(u.grid_row, w.grid_row), \
                     grid_col = COALESCE(u.grid_col, w.grid_col), \
                     height = COALESCE(u.height, w.height), \
                     width = COALESCE(u.width, w.width) \
                 FROM UNNEST($1::bigint[], $2::text[], $3::text[], $4::int[], $5::int[], \
                             $6::int[], $7::int[]) \
                     AS u(id, widget_type, name, grid_row, grid_col, height, width) \
                 WHERE w.id = u.id",
            )
            .bind(&ids)
            .bind(&types)
            .bind(&names)
            .bind(&rows)
            .bind(&cols)
            .bind(&heights)
            .bind(&widths)
            .execute(&mut *conn)
            .await?;
        }

        if !plan.inserts.is_empty() {
            let dashboard_ids: Vec<DbId> = plan.inserts.iter().map(|w| w.dashboard_id).collect();
            let types: Vec<String> = plan.inserts.iter().map(|w| w.spec.widget_type.clone()).collect();
            let names: Vec<String> = plan.inserts.iter().map(|w| w.spec.name.clone()).collect();
            let rows: Vec<i32> = plan.inserts.iter().map(|w| w.spec.row).collect();
            let cols: Vec<i32> = plan.inserts.iter().map(|w| w.spec.col).collect();
            let heights: Vec<i32> = plan.inserts.iter().map(|w| w.spec.height).collect();
            let widths: Vec<i32> = plan.inserts.iter().map(|w| w.spec.width).collect();

            sqlx::query(
                "INSERT INTO widgets \
                    (dashboard_id, widget_type, name, grid_row, grid_col, height, width) \
                 SELECT * FROM UNNEST($1::bigint[], $2::text[], $3::text[], $4::int[], \
                                      $5::int[], $6::int[], $7::int[])",
            )
            .bind(&dashboard_ids)
            .bind(&types)
            .bind(&names)
            .bind(&rows)
            .bind(&cols)
            .bind(&heights)
            .bind(&widths)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}
