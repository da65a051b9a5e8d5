//! Dashboard row model.

use serde::Serialize;
use sqlx::FromRow;
use vigil_core::dashboard::{DashboardState, Sharing};
use vigil_core::types::{DbId, Timestamp};

use super::share::DashboardShare;
use super::widget::Widget;

/// A row from the `dashboards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dashboard {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
    pub private: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Dashboard {
    /// Scalar state used for diffing updates.
    pub fn state(&self) -> Result<DashboardState, String> {
        Ok(DashboardState {
            id: self.id,
            name: self.name.clone(),
            owner_id: self.user_id,
            sharing: Sharing::try_from(self.private)?,
        })
    }
}

/// A dashboard together with its sharing grants and widgets.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardDetail {
    #[serde(flatten)]
    pub dashboard: Dashboard,
    pub users: Vec<DashboardShare>,
    pub user_groups: Vec<DashboardShare>,
    pub widgets: Vec<Widget>,
}
