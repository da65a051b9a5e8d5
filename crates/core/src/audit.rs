//! Audit logging constants and snapshot helpers.
//!
//! Lives in `core` so both the repository and handler layers agree on the
//! action names written to `audit_logs`.

use serde::Serialize;

/// Known action types for audit log entries.
pub mod action_types {
    pub const ENTITY_CREATE: &str = "entity_create";
    pub const ENTITY_UPDATE: &str = "entity_update";
    pub const ENTITY_DELETE: &str = "entity_delete";
}

/// Known entity types for audit log entries.
pub mod entity_types {
    pub const DASHBOARD: &str = "dashboard";
}

/// Build the `details_json` payload for an audit entry.
///
/// Either side may be absent: creates have no `before`, deletes have no
/// `after`. Serialization failures degrade to `null` rather than aborting
/// the write that is being audited.
pub fn snapshot_details<B: Serialize, A: Serialize>(
    before: Option<&B>,
    after: Option<&A>,
) -> serde_json::Value {
    let to_value = |v: Option<serde_json::Value>| v.unwrap_or(serde_json::Value::Null);
    serde_json::json!({
        "before": to_value(before.and_then(|b| serde_json::to_value(b).ok())),
        "after": to_value(after.and_then(|a| serde_json::to_value(a).ok())),
    })
}
