//! Well-known role name constants and the user type they map to.
//!
//! These must match the `user_type` values seeded in
//! `20260301000001_create_users.sql` and the `role` claim issued in tokens.

use serde::{Deserialize, Serialize};

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// Privilege tier of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    User,
    Admin,
    SuperAdmin,
}

impl UserType {
    /// Parse a role name. Returns `None` for unknown roles.
    pub fn from_role(role: &str) -> Option<Self> {
        match role {
            ROLE_USER => Some(Self::User),
            ROLE_ADMIN => Some(Self::Admin),
            ROLE_SUPER_ADMIN => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => ROLE_USER,
            Self::Admin => ROLE_ADMIN,
            Self::SuperAdmin => ROLE_SUPER_ADMIN,
        }
    }

    /// Admins and super-admins may act on behalf of other users.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}
