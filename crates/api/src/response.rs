//! Shared response envelope types for API handlers.
//!
//! Write endpoints answer with `{ "data": ... }`; use [`DataResponse`]
//! rather than ad-hoc `json!` bodies.

use serde::Serialize;
use vigil_core::types::DbId;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload of create, update and delete responses.
#[derive(Debug, Serialize)]
pub struct DashboardIds {
    pub dashboard_ids: Vec<DbId>,
}
