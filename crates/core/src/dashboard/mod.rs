//! Dashboard domain: sharing grants, the widget grid, and child-relation
//! synchronisation.
//!
//! Request payloads arrive as the loosely-checked DTOs in [`input`] and are
//! turned into the typed records below by [`validation`]. Nothing in this
//! module touches storage; the API layer feeds it persisted rows and applies
//! the resulting [`sync::SyncPlan`]s.

pub mod grid;
pub mod input;
pub mod sync;
pub mod validation;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Grid constants
// ---------------------------------------------------------------------------

/// Last valid row index of the dashboard grid.
pub const MAX_ROW: i32 = 63;

/// Last valid column index of the dashboard grid.
pub const MAX_COL: i32 = 11;

/// Number of rows in the grid.
pub const GRID_ROWS: usize = 64;

/// Number of columns in the grid.
pub const GRID_COLUMNS: usize = 12;

/// Tallest widget accepted by structural validation.
pub const MAX_WIDGET_HEIGHT: i32 = 32;

/// Widest widget accepted by structural validation.
pub const MAX_WIDGET_WIDTH: i32 = 12;

pub const DEFAULT_WIDGET_ROW: i32 = 0;
pub const DEFAULT_WIDGET_COL: i32 = 0;
pub const DEFAULT_WIDGET_HEIGHT: i32 = 2;
pub const DEFAULT_WIDGET_WIDTH: i32 = 1;

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Maximum length (in characters) of a dashboard name.
pub const NAME_MAX_LEN: usize = 255;

/// Maximum length (in characters) of a widget type.
pub const WIDGET_TYPE_MAX_LEN: usize = 255;

/// Maximum length (in characters) of a widget display name.
pub const WIDGET_NAME_MAX_LEN: usize = 255;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Access level granted by a sharing grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum Permission {
    Read,
    ReadWrite,
}

impl Permission {
    /// Numeric code as stored in the database.
    pub fn code(&self) -> i16 {
        match self {
            Self::Read => 2,
            Self::ReadWrite => 3,
        }
    }
}

impl From<Permission> for i16 {
    fn from(p: Permission) -> Self {
        p.code()
    }
}

impl TryFrom<i16> for Permission {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(Self::Read),
            3 => Ok(Self::ReadWrite),
            other => Err(format!("unknown permission code {other}")),
        }
    }
}

/// Whether a dashboard is visible to everyone or only to its grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum Sharing {
    Public,
    #[default]
    Private,
}

impl Sharing {
    /// Numeric code as stored in the database.
    pub fn code(&self) -> i16 {
        match self {
            Self::Public => 0,
            Self::Private => 1,
        }
    }
}

impl From<Sharing> for i16 {
    fn from(s: Sharing) -> Self {
        s.code()
    }
}

impl TryFrom<i16> for Sharing {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Public),
            1 => Ok(Self::Private),
            other => Err(format!("unknown sharing code {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Typed records
// ---------------------------------------------------------------------------

/// A desired sharing grant for a user or a user group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShareGrant {
    pub target_id: DbId,
    pub permission: Permission,
}

/// Position, size and identity of a widget on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSpec {
    #[serde(rename = "type")]
    pub widget_type: String,
    pub name: String,
    pub row: i32,
    pub col: i32,
    pub height: i32,
    pub width: i32,
}

impl WidgetSpec {
    /// Last row the widget occupies.
    pub fn bottom(&self) -> i32 {
        self.row + self.height - 1
    }

    /// Last column the widget occupies.
    pub fn right(&self) -> i32 {
        self.col + self.width - 1
    }
}

/// A fully validated dashboard ready to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDashboard {
    pub name: String,
    pub owner_id: DbId,
    pub sharing: Sharing,
    pub users: Vec<ShareGrant>,
    pub user_groups: Vec<ShareGrant>,
    pub widgets: Vec<WidgetSpec>,
}

/// A validated update request. `None` means "leave unchanged".
///
/// A present child list replaces the stored set; an empty list removes
/// every grant or widget of that kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPatch {
    pub dashboard_id: DbId,
    pub name: Option<String>,
    pub owner_id: Option<DbId>,
    pub sharing: Option<Sharing>,
    pub users: Option<Vec<ShareGrant>>,
    pub user_groups: Option<Vec<ShareGrant>>,
    pub widgets: Option<Vec<WidgetSpec>>,
}

/// Scalar state of a stored dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub id: DbId,
    pub name: String,
    pub owner_id: DbId,
    pub sharing: Sharing,
}

/// Scalar fields that actually differ between a patch and stored state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardChanges {
    pub name: Option<String>,
    pub owner_id: Option<DbId>,
    pub sharing: Option<Sharing>,
}

impl DashboardPatch {
    /// Name the dashboard will carry once this patch is applied.
    pub fn effective_name<'a>(&'a self, current: &'a DashboardState) -> &'a str {
        self.name.as_deref().unwrap_or(&current.name)
    }

    /// Compute the scalar changes this patch makes to `current`.
    ///
    /// Returns `None` when every supplied field already matches.
    pub fn scalar_changes(&self, current: &DashboardState) -> Option<DashboardChanges> {
        let changes = DashboardChanges {
            name: self.name.clone().filter(|n| *n != current.name),
            owner_id: self.owner_id.filter(|o| *o != current.owner_id),
            sharing: self.sharing.filter(|s| *s != current.sharing),
        };

        if changes == DashboardChanges::default() {
            None
        } else {
            Some(changes)
        }
    }
}
