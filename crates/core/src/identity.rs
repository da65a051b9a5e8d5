//! Request-scoped identity passed explicitly into core operations.

use crate::roles::UserType;
use crate::types::DbId;

/// The caller of the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: DbId,
    pub user_type: UserType,
}

impl Identity {
    pub fn new(user_id: DbId, user_type: UserType) -> Self {
        Self { user_id, user_type }
    }

    /// Whether this caller may make `owner_id` the owner of a dashboard.
    pub fn may_assign_owner(&self, owner_id: DbId) -> bool {
        owner_id == self.user_id || self.user_type.is_admin()
    }
}
