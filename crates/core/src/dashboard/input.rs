//! Request DTOs for dashboard create/update/delete.
//!
//! These mirror the JSON the API accepts. Range and length rules are
//! declared with `validator`; the rules that need context (required
//! non-empty strings, in-request uniqueness, ownership) live in
//! [`super::validation`].

use serde::Deserialize;
use validator::Validate;

use crate::types::DbId;

/// One dashboard in a create request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDashboard {
    #[validate(length(max = 255, message = "value is too long"))]
    pub name: String,
    #[validate(range(min = 1, message = "a positive identifier is expected"))]
    pub user_id: Option<DbId>,
    #[validate(range(min = 0, max = 1, message = "value must be one of 0, 1"))]
    pub private: Option<i32>,
    pub users: Option<Vec<UserShareInput>>,
    pub user_groups: Option<Vec<GroupShareInput>>,
    pub widgets: Option<Vec<WidgetInput>>,
}

/// One dashboard in an update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDashboard {
    #[validate(range(min = 1, message = "a positive identifier is expected"))]
    pub dashboard_id: DbId,
    #[validate(length(max = 255, message = "value is too long"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "a positive identifier is expected"))]
    pub user_id: Option<DbId>,
    #[validate(range(min = 0, max = 1, message = "value must be one of 0, 1"))]
    pub private: Option<i32>,
    pub users: Option<Vec<UserShareInput>>,
    pub user_groups: Option<Vec<GroupShareInput>>,
    pub widgets: Option<Vec<WidgetInput>>,
}

/// A user sharing grant as submitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserShareInput {
    #[validate(range(min = 1, message = "a positive identifier is expected"))]
    pub user_id: DbId,
    #[validate(range(min = 2, max = 3, message = "value must be one of 2, 3"))]
    pub permission: i32,
}

/// A user group sharing grant as submitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GroupShareInput {
    #[validate(range(min = 1, message = "a positive identifier is expected"))]
    pub user_group_id: DbId,
    #[validate(range(min = 2, max = 3, message = "value must be one of 2, 3"))]
    pub permission: i32,
}

/// A widget placement as submitted. Missing geometry falls back to the
/// column defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WidgetInput {
    #[serde(rename = "type")]
    pub widget_type: String,
    #[validate(length(max = 255, message = "value is too long"))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 63, message = "value must be one of 0-63"))]
    pub row: Option<i32>,
    #[validate(range(min = 0, max = 11, message = "value must be one of 0-11"))]
    pub col: Option<i32>,
    #[validate(range(min = 1, max = 32, message = "value must be one of 1-32"))]
    pub height: Option<i32>,
    #[validate(range(min = 1, max = 12, message = "value must be one of 1-12"))]
    pub width: Option<i32>,
}
