//! Child-relation synchronisation planning.
//!
//! Each dashboard owns three child relations: user grants, user group
//! grants and widgets. On write, the desired set is compared with the
//! persisted rows and turned into a [`SyncPlan`] of deletes, patches and
//! inserts. Unchanged rows are not touched, so their ids stay stable.
//!
//! Grants are matched by their natural key (the user or group id). Widgets
//! have no natural key: both sides are ordered by `(row, col)` and paired by
//! position.

use std::collections::HashMap;

use serde::Serialize;

use super::{Permission, ShareGrant, WidgetSpec};
use crate::types::DbId;

/// Which write path is synchronising children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Fresh dashboards: there are no persisted rows to compare with.
    Create,
    /// Existing dashboards: persisted rows must be loaded and diffed.
    Update,
}

impl WriteMode {
    /// Whether the caller must load persisted rows before planning.
    pub fn reads_persisted(&self) -> bool {
        matches!(self, Self::Update)
    }
}

/// Queued writes for one child relation.
///
/// Applied in field order: deletes, then patches, then inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan<I, P> {
    pub deletes: Vec<DbId>,
    pub patches: Vec<P>,
    pub inserts: Vec<I>,
}

impl<I, P> Default for SyncPlan<I, P> {
    fn default() -> Self {
        Self {
            deletes: Vec::new(),
            patches: Vec::new(),
            inserts: Vec::new(),
        }
    }
}

impl<I, P> SyncPlan<I, P> {
    /// `true` when applying the plan would not write anything.
    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty() && self.patches.is_empty() && self.inserts.is_empty()
    }

    /// Fold another plan into this one so a batch of dashboards can be
    /// written with one statement per kind.
    pub fn merge(&mut self, other: Self) {
        self.deletes.extend(other.deletes);
        self.patches.extend(other.patches);
        self.inserts.extend(other.inserts);
    }
}

// ---------------------------------------------------------------------------
// Sharing grants
// ---------------------------------------------------------------------------

/// A stored grant row (user or user group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedShare {
    pub id: DbId,
    pub dashboard_id: DbId,
    pub target_id: DbId,
    pub permission: Permission,
}

/// A grant row to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewShare {
    pub dashboard_id: DbId,
    pub target_id: DbId,
    pub permission: Permission,
}

/// A permission change on an existing grant row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePatch {
    pub id: DbId,
    pub permission: Permission,
}

pub type ShareSyncPlan = SyncPlan<NewShare, SharePatch>;

/// Plan the writes that turn `persisted` into `desired` for one dashboard.
///
/// `persisted` must only contain rows of `dashboard_id`. Duplicate target
/// ids in `desired` are rejected by validation before this is called; if
/// one slips through, the last grant wins.
pub fn plan_share_sync(
    dashboard_id: DbId,
    desired: &[ShareGrant],
    persisted: &[PersistedShare],
) -> ShareSyncPlan {
    let mut wanted: HashMap<DbId, (usize, Permission)> = HashMap::with_capacity(desired.len());
    for (idx, grant) in desired.iter().enumerate() {
        wanted.insert(grant.target_id, (idx, grant.permission));
    }

    let mut plan = ShareSyncPlan::default();
    let mut handled = vec![false; desired.len()];

    for row in persisted {
        match wanted.remove(&row.target_id) {
            Some((idx, permission)) => {
                handled[idx] = true;
                if permission != row.permission {
                    plan.patches.push(SharePatch {
                        id: row.id,
                        permission,
                    });
                }
            }
            None => plan.deletes.push(row.id),
        }
    }

    for (idx, grant) in desired.iter().enumerate() {
        let is_last_for_key = wanted.get(&grant.target_id).is_some_and(|(i, _)| *i == idx);
        if !handled[idx] && is_last_for_key {
            plan.inserts.push(NewShare {
                dashboard_id,
                target_id: grant.target_id,
                permission: grant.permission,
            });
        }
    }

    plan
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

/// A stored widget row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedWidget {
    pub id: DbId,
    pub dashboard_id: DbId,
    pub spec: WidgetSpec,
}

/// A widget row to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWidget {
    pub dashboard_id: DbId,
    pub spec: WidgetSpec,
}

/// Field-level changes to an existing widget. `None` fields are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetChanges {
    pub widget_type: Option<String>,
    pub name: Option<String>,
    pub row: Option<i32>,
    pub col: Option<i32>,
    pub height: Option<i32>,
    pub width: Option<i32>,
}

impl WidgetChanges {
    /// Compare two widget specs field by field.
    ///
    /// Returns `None` when nothing differs.
    pub fn between(current: &WidgetSpec, desired: &WidgetSpec) -> Option<Self> {
        fn differs<T: PartialEq + Clone>(current: &T, desired: &T) -> Option<T> {
            (current != desired).then(|| desired.clone())
        }

        let changes = Self {
            widget_type: differs(&current.widget_type, &desired.widget_type),
            name: differs(&current.name, &desired.name),
            row: differs(&current.row, &desired.row),
            col: differs(&current.col, &desired.col),
            height: differs(&current.height, &desired.height),
            width: differs(&current.width, &desired.width),
        };

        (changes != Self::default()).then_some(changes)
    }
}

/// Field-level update of one widget row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetPatch {
    pub id: DbId,
    pub changes: WidgetChanges,
}

pub type WidgetSyncPlan = SyncPlan<NewWidget, WidgetPatch>;

/// Plan the writes that turn `persisted` into `desired` for one dashboard.
///
/// Both sides are ordered by `(row, col)` and paired positionally: the
/// n-th desired widget patches the n-th stored one. Surplus stored widgets
/// are deleted and surplus desired widgets are inserted.
pub fn plan_widget_sync(
    dashboard_id: DbId,
    desired: &[WidgetSpec],
    persisted: &[PersistedWidget],
) -> WidgetSyncPlan {
    let mut desired: Vec<&WidgetSpec> = desired.iter().collect();
    desired.sort_by_key(|w| (w.row, w.col));

    let mut persisted: Vec<&PersistedWidget> = persisted.iter().collect();
    persisted.sort_by_key(|w| (w.spec.row, w.spec.col, w.id));

    let mut plan = WidgetSyncPlan::default();
    let mut desired = desired.into_iter();

    for stored in persisted {
        match desired.next() {
            Some(spec) => {
                if let Some(changes) = WidgetChanges::between(&stored.spec, spec) {
                    plan.patches.push(WidgetPatch {
                        id: stored.id,
                        changes,
                    });
                }
            }
            None => plan.deletes.push(stored.id),
        }
    }

    plan.inserts.extend(desired.map(|spec| NewWidget {
        dashboard_id,
        spec: spec.clone(),
    }));

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    const DASHBOARD: DbId = 1;

    fn grant(target_id: DbId, permission: Permission) -> ShareGrant {
        ShareGrant {
            target_id,
            permission,
        }
    }

    fn stored_share(id: DbId, target_id: DbId, permission: Permission) -> PersistedShare {
        PersistedShare {
            id,
            dashboard_id: DASHBOARD,
            target_id,
            permission,
        }
    }

    fn spec(row: i32, col: i32) -> WidgetSpec {
        WidgetSpec {
            widget_type: "clock".to_string(),
            name: String::new(),
            row,
            col,
            height: 1,
            width: 1,
        }
    }

    fn stored_widget(id: DbId, spec: WidgetSpec) -> PersistedWidget {
        PersistedWidget {
            id,
            dashboard_id: DASHBOARD,
            spec,
        }
    }

    // -- WriteMode ----------------------------------------------------------

    #[test]
    fn only_update_reads_persisted_rows() {
        assert!(!WriteMode::Create.reads_persisted());
        assert!(WriteMode::Update.reads_persisted());
    }

    // -- Shares -------------------------------------------------------------

    #[test]
    fn create_baseline_inserts_everything() {
        let desired = [grant(5, Permission::Read), grant(6, Permission::ReadWrite)];
        let plan = plan_share_sync(DASHBOARD, &desired, &[]);
        assert!(plan.deletes.is_empty());
        assert!(plan.patches.is_empty());
        assert_eq!(
            plan.inserts,
            vec![
                NewShare {
                    dashboard_id: DASHBOARD,
                    target_id: 5,
                    permission: Permission::Read
                },
                NewShare {
                    dashboard_id: DASHBOARD,
                    target_id: 6,
                    permission: Permission::ReadWrite
                },
            ]
        );
    }

    #[test]
    fn unchanged_shares_produce_an_empty_plan() {
        let desired = [grant(5, Permission::Read), grant(6, Permission::ReadWrite)];
        let persisted = [
            stored_share(100, 6, Permission::ReadWrite),
            stored_share(101, 5, Permission::Read),
        ];
        assert!(plan_share_sync(DASHBOARD, &desired, &persisted).is_empty());
    }

    #[test]
    fn single_permission_change_is_a_single_patch() {
        let desired = [grant(5, Permission::ReadWrite), grant(6, Permission::ReadWrite)];
        let persisted = [
            stored_share(100, 5, Permission::Read),
            stored_share(101, 6, Permission::ReadWrite),
        ];
        let plan = plan_share_sync(DASHBOARD, &desired, &persisted);
        assert!(plan.deletes.is_empty());
        assert!(plan.inserts.is_empty());
        assert_eq!(
            plan.patches,
            vec![SharePatch {
                id: 100,
                permission: Permission::ReadWrite
            }]
        );
    }

    #[test]
    fn removed_and_added_targets() {
        let desired = [grant(6, Permission::Read), grant(7, Permission::Read)];
        let persisted = [
            stored_share(100, 5, Permission::Read),
            stored_share(101, 6, Permission::Read),
        ];
        let plan = plan_share_sync(DASHBOARD, &desired, &persisted);
        assert_eq!(plan.deletes, vec![100]);
        assert!(plan.patches.is_empty());
        assert_eq!(plan.inserts.len(), 1);
        assert_eq!(plan.inserts[0].target_id, 7);
    }

    #[test]
    fn empty_desired_set_deletes_everything() {
        let persisted = [
            stored_share(100, 5, Permission::Read),
            stored_share(101, 6, Permission::Read),
        ];
        let plan = plan_share_sync(DASHBOARD, &[], &persisted);
        assert_eq!(plan.deletes, vec![100, 101]);
        assert!(plan.inserts.is_empty());
    }

    #[test]
    fn duplicate_desired_target_inserts_once_with_last_permission() {
        let desired = [grant(5, Permission::Read), grant(5, Permission::ReadWrite)];
        let plan = plan_share_sync(DASHBOARD, &desired, &[]);
        assert_eq!(plan.inserts.len(), 1);
        assert_eq!(plan.inserts[0].permission, Permission::ReadWrite);
    }

    // -- Widgets ------------------------------------------------------------

    #[test]
    fn widgets_on_create_are_inserted_in_grid_order() {
        let desired = [spec(3, 0), spec(0, 5), spec(0, 1)];
        let plan = plan_widget_sync(DASHBOARD, &desired, &[]);
        let order: Vec<(i32, i32)> = plan
            .inserts
            .iter()
            .map(|w| (w.spec.row, w.spec.col))
            .collect();
        assert_eq!(order, vec![(0, 1), (0, 5), (3, 0)]);
    }

    #[test]
    fn unchanged_widgets_produce_an_empty_plan() {
        let desired = [spec(0, 0), spec(2, 4)];
        let persisted = [stored_widget(11, spec(2, 4)), stored_widget(10, spec(0, 0))];
        assert!(plan_widget_sync(DASHBOARD, &desired, &persisted).is_empty());
    }

    #[test]
    fn renaming_one_widget_patches_only_its_name() {
        let mut renamed = spec(2, 4);
        renamed.name = "Latency".to_string();
        let desired = [spec(0, 0), renamed];
        let persisted = [stored_widget(10, spec(0, 0)), stored_widget(11, spec(2, 4))];

        let plan = plan_widget_sync(DASHBOARD, &desired, &persisted);
        assert!(plan.deletes.is_empty());
        assert!(plan.inserts.is_empty());
        assert_eq!(
            plan.patches,
            vec![WidgetPatch {
                id: 11,
                changes: WidgetChanges {
                    name: Some("Latency".to_string()),
                    ..WidgetChanges::default()
                },
            }]
        );
    }

    #[test]
    fn moved_widget_is_patched_in_place() {
        let desired = [spec(5, 5)];
        let persisted = [stored_widget(10, spec(0, 0))];
        let plan = plan_widget_sync(DASHBOARD, &desired, &persisted);
        assert_eq!(plan.patches.len(), 1);
        assert_eq!(plan.patches[0].id, 10);
        assert_eq!(plan.patches[0].changes.row, Some(5));
        assert_eq!(plan.patches[0].changes.col, Some(5));
        assert_eq!(plan.patches[0].changes.widget_type, None);
    }

    #[test]
    fn surplus_stored_widgets_are_deleted() {
        let desired = [spec(0, 0)];
        let persisted = [
            stored_widget(10, spec(0, 0)),
            stored_widget(11, spec(1, 0)),
            stored_widget(12, spec(2, 0)),
        ];
        let plan = plan_widget_sync(DASHBOARD, &desired, &persisted);
        assert_eq!(plan.deletes, vec![11, 12]);
        assert!(plan.patches.is_empty());
        assert!(plan.inserts.is_empty());
    }

    #[test]
    fn surplus_desired_widgets_are_inserted() {
        let desired = [spec(0, 0), spec(1, 0)];
        let persisted = [stored_widget(10, spec(0, 0))];
        let plan = plan_widget_sync(DASHBOARD, &desired, &persisted);
        assert!(plan.deletes.is_empty());
        assert!(plan.patches.is_empty());
        assert_eq!(plan.inserts.len(), 1);
        assert_eq!(plan.inserts[0].spec.row, 1);
    }

    // -- SyncPlan -----------------------------------------------------------

    #[test]
    fn merge_concatenates_each_kind() {
        let mut a = ShareSyncPlan::default();
        a.deletes.push(1);
        let mut b = ShareSyncPlan::default();
        b.deletes.push(2);
        b.patches.push(SharePatch {
            id: 3,
            permission: Permission::Read,
        });
        a.merge(b);
        assert_eq!(a.deletes, vec![1, 2]);
        assert_eq!(a.patches.len(), 1);
        assert!(!a.is_empty());
    }
}
