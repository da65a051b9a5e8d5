//! Sharing grant rows for `dashboard_users` and `dashboard_user_groups`.
//!
//! Both tables are read through the same shape: the user or group column is
//! selected as `target_id`.

use serde::Serialize;
use sqlx::FromRow;
use vigil_core::dashboard::sync::PersistedShare;
use vigil_core::dashboard::Permission;
use vigil_core::types::DbId;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardShare {
    pub id: DbId,
    pub dashboard_id: DbId,
    pub target_id: DbId,
    pub permission: i16,
}

impl DashboardShare {
    pub fn to_persisted(&self) -> Result<PersistedShare, String> {
        Ok(PersistedShare {
            id: self.id,
            dashboard_id: self.dashboard_id,
            target_id: self.target_id,
            permission: Permission::try_from(self.permission)?,
        })
    }
}
