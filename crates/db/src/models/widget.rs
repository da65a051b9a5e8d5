//! Widget row model.

use serde::Serialize;
use sqlx::FromRow;
use vigil_core::dashboard::sync::PersistedWidget;
use vigil_core::dashboard::WidgetSpec;
use vigil_core::types::DbId;

/// A row from the `widgets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Widget {
    pub id: DbId,
    pub dashboard_id: DbId,
    #[serde(rename = "type")]
    pub widget_type: String,
    pub name: String,
    #[serde(rename = "row")]
    pub grid_row: i32,
    #[serde(rename = "col")]
    pub grid_col: i32,
    pub height: i32,
    pub width: i32,
}

impl Widget {
    pub fn spec(&self) -> WidgetSpec {
        WidgetSpec {
            widget_type: self.widget_type.clone(),
            name: self.name.clone(),
            row: self.grid_row,
            col: self.grid_col,
            height: self.height,
            width: self.width,
        }
    }

    pub fn to_persisted(&self) -> PersistedWidget {
        PersistedWidget {
            id: self.id,
            dashboard_id: self.dashboard_id,
            spec: self.spec(),
        }
    }
}
