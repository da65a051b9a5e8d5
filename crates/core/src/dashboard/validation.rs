//! Request validation for dashboard writes.
//!
//! Everything here runs before storage is consulted: field ranges, required
//! values, uniqueness inside the request, the owner rule and (for creates)
//! widget placement. Checks that need persisted state are split into small
//! helpers the API layer calls once it has the rows.

use std::collections::HashSet;
use std::fmt::Display;

use validator::Validate;

use super::grid::check_widget_placement;
use super::input::{CreateDashboard, GroupShareInput, UpdateDashboard, UserShareInput, WidgetInput};
use super::{
    DashboardPatch, DashboardState, NewDashboard, Permission, ShareGrant, Sharing, WidgetSpec,
    DEFAULT_WIDGET_COL, DEFAULT_WIDGET_HEIGHT, DEFAULT_WIDGET_ROW, DEFAULT_WIDGET_WIDTH,
    WIDGET_TYPE_MAX_LEN,
};
use crate::error::CoreError;
use crate::identity::Identity;
use crate::types::DbId;

pub const OWNER_CHANGE_DENIED: &str = "Only administrators can set dashboard owner.";

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Validate a create batch and resolve defaults.
///
/// A missing owner defaults to the caller and a missing `private` flag
/// defaults to private.
pub fn validate_create(
    requests: &[CreateDashboard],
    caller: &Identity,
) -> Result<Vec<NewDashboard>, CoreError> {
    require_non_empty_batch(requests)?;

    let mut dashboards = Vec::with_capacity(requests.len());
    for (idx, req) in requests.iter().enumerate() {
        let base = format!("/{}", idx + 1);
        check_fields(req, &base)?;
        require_non_empty(&req.name, &format!("{base}/name"))?;

        dashboards.push(NewDashboard {
            name: req.name.clone(),
            owner_id: req.user_id.unwrap_or(caller.user_id),
            sharing: sharing_from_input(req.private, &base)?.unwrap_or_default(),
            users: user_grants(req.users.as_deref().unwrap_or_default(), &base)?,
            user_groups: group_grants(req.user_groups.as_deref().unwrap_or_default(), &base)?,
            widgets: widget_specs(req.widgets.as_deref().unwrap_or_default(), &base)?,
        });
    }

    reject_duplicates(dashboards.iter().map(|d| Some(d.name.as_str())), "name")?;

    for dashboard in &dashboards {
        if !caller.may_assign_owner(dashboard.owner_id) {
            return Err(CoreError::Validation(OWNER_CHANGE_DENIED.to_string()));
        }
    }

    for dashboard in &dashboards {
        check_widget_placement(&dashboard.name, &dashboard.widgets)?;
    }

    Ok(dashboards)
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Validate an update batch.
///
/// Placement is not checked here because the effective dashboard name may
/// come from storage; see [`check_patch_placement`].
pub fn validate_update(
    requests: &[UpdateDashboard],
    caller: &Identity,
) -> Result<Vec<DashboardPatch>, CoreError> {
    require_non_empty_batch(requests)?;

    let mut patches = Vec::with_capacity(requests.len());
    for (idx, req) in requests.iter().enumerate() {
        let base = format!("/{}", idx + 1);
        check_fields(req, &base)?;
        if let Some(name) = &req.name {
            require_non_empty(name, &format!("{base}/name"))?;
        }

        patches.push(DashboardPatch {
            dashboard_id: req.dashboard_id,
            name: req.name.clone(),
            owner_id: req.user_id,
            sharing: sharing_from_input(req.private, &base)?,
            users: req
                .users
                .as_deref()
                .map(|users| user_grants(users, &base))
                .transpose()?,
            user_groups: req
                .user_groups
                .as_deref()
                .map(|groups| group_grants(groups, &base))
                .transpose()?,
            widgets: req
                .widgets
                .as_deref()
                .map(|widgets| widget_specs(widgets, &base))
                .transpose()?,
        });
    }

    reject_duplicates(patches.iter().map(|p| Some(p.dashboard_id)), "dashboard_id")?;
    reject_duplicates(patches.iter().map(|p| p.name.as_deref()), "name")?;

    for patch in &patches {
        if let Some(owner_id) = patch.owner_id {
            if !caller.may_assign_owner(owner_id) {
                return Err(CoreError::Validation(OWNER_CHANGE_DENIED.to_string()));
            }
        }
    }

    Ok(patches)
}

/// Grid check for an update, using the stored name when the patch keeps it.
///
/// Patches that leave the widget list untouched always pass.
pub fn check_patch_placement(
    patch: &DashboardPatch,
    current: &DashboardState,
) -> Result<(), CoreError> {
    match &patch.widgets {
        Some(widgets) => check_widget_placement(patch.effective_name(current), widgets),
        None => Ok(()),
    }
}

/// Names that must be checked against storage: only those that change.
pub fn changed_names<'a>(
    patches: &'a [DashboardPatch],
    current: &[DashboardState],
) -> Vec<&'a str> {
    patches
        .iter()
        .filter_map(|patch| {
            let name = patch.name.as_deref()?;
            let stored = current.iter().find(|s| s.id == patch.dashboard_id)?;
            (stored.name != name).then_some(name)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Validate the id list of a delete request.
pub fn validate_delete_ids(ids: &[DbId]) -> Result<Vec<DbId>, CoreError> {
    require_non_empty_batch(ids)?;

    let mut seen = HashSet::with_capacity(ids.len());
    for (idx, id) in ids.iter().enumerate() {
        let path = format!("/{}", idx + 1);
        if *id < 1 {
            return Err(CoreError::invalid_parameter(path, "a positive identifier is expected"));
        }
        if !seen.insert(*id) {
            return Err(CoreError::invalid_parameter(
                path,
                format!("value ({id}) already exists"),
            ));
        }
    }

    Ok(ids.to_vec())
}

// ---------------------------------------------------------------------------
// Reference checks
// ---------------------------------------------------------------------------

/// User ids a create batch refers to, excluding the caller.
pub fn create_user_refs(dashboards: &[NewDashboard], caller: &Identity) -> Vec<DbId> {
    let ids = dashboards.iter().flat_map(|d| {
        std::iter::once(d.owner_id).chain(d.users.iter().map(|g| g.target_id))
    });
    distinct_excluding(ids, Some(caller.user_id))
}

/// User group ids a create batch refers to.
pub fn create_group_refs(dashboards: &[NewDashboard]) -> Vec<DbId> {
    distinct_excluding(
        dashboards
            .iter()
            .flat_map(|d| d.user_groups.iter().map(|g| g.target_id)),
        None,
    )
}

/// User ids an update batch refers to, excluding the caller.
pub fn update_user_refs(patches: &[DashboardPatch], caller: &Identity) -> Vec<DbId> {
    let ids = patches.iter().flat_map(|p| {
        p.owner_id
            .into_iter()
            .chain(p.users.iter().flatten().map(|g| g.target_id))
    });
    distinct_excluding(ids, Some(caller.user_id))
}

/// User group ids an update batch refers to.
pub fn update_group_refs(patches: &[DashboardPatch]) -> Vec<DbId> {
    distinct_excluding(
        patches
            .iter()
            .flat_map(|p| p.user_groups.iter().flatten().map(|g| g.target_id)),
        None,
    )
}

/// First id of `requested` that storage did not return.
pub fn first_missing(requested: &[DbId], found: &[DbId]) -> Option<DbId> {
    let found: HashSet<DbId> = found.iter().copied().collect();
    requested.iter().copied().find(|id| !found.contains(id))
}

pub fn missing_user(id: DbId) -> CoreError {
    CoreError::Validation(format!("User with ID \"{id}\" is not available."))
}

pub fn missing_user_group(id: DbId) -> CoreError {
    CoreError::Validation(format!("User group with ID \"{id}\" is not available."))
}

pub fn duplicate_name(name: &str) -> CoreError {
    CoreError::Validation(format!("Dashboard \"{name}\" already exists."))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_non_empty_batch<T>(items: &[T]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::invalid_parameter("/", "cannot be empty"));
    }
    Ok(())
}

fn require_non_empty(value: &str, path: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::invalid_parameter(path, "cannot be empty"));
    }
    Ok(())
}

/// Run the derived field rules and report the first failure under `base`.
///
/// Failing fields are visited in name order so the reported error is stable.
fn check_fields<T: Validate>(value: &T, base: &str) -> Result<(), CoreError> {
    let Err(errors) = value.validate() else {
        return Ok(());
    };

    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let first = errs.first()?;
            let reason = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some((field.to_string(), reason))
        })
        .collect();
    fields.sort();

    match fields.into_iter().next() {
        Some((field, reason)) => Err(CoreError::invalid_parameter(format!("{base}/{field}"), reason)),
        None => Ok(()),
    }
}

/// Reject the second occurrence of any value, naming its 1-based position.
fn reject_duplicates<T: Eq + std::hash::Hash + Display>(
    values: impl IntoIterator<Item = Option<T>>,
    field: &str,
) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for (idx, value) in values.into_iter().enumerate() {
        let Some(value) = value else { continue };
        let message = format!("value ({field})=({value}) already exists");
        if !seen.insert(value) {
            return Err(CoreError::invalid_parameter(format!("/{}", idx + 1), message));
        }
    }
    Ok(())
}

fn distinct_excluding(ids: impl IntoIterator<Item = DbId>, exclude: Option<DbId>) -> Vec<DbId> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| Some(*id) != exclude && seen.insert(*id))
        .collect()
}

fn sharing_from_input(private: Option<i32>, base: &str) -> Result<Option<Sharing>, CoreError> {
    private
        .map(|code| {
            i16::try_from(code)
                .ok()
                .and_then(|c| Sharing::try_from(c).ok())
                .ok_or_else(|| {
                    CoreError::invalid_parameter(format!("{base}/private"), "value must be one of 0, 1")
                })
        })
        .transpose()
}

fn permission_from_input(code: i32, path: &str) -> Result<Permission, CoreError> {
    i16::try_from(code)
        .ok()
        .and_then(|c| Permission::try_from(c).ok())
        .ok_or_else(|| CoreError::invalid_parameter(path, "value must be one of 2, 3"))
}

fn user_grants(inputs: &[UserShareInput], base: &str) -> Result<Vec<ShareGrant>, CoreError> {
    let mut grants = Vec::with_capacity(inputs.len());
    let mut seen = HashSet::with_capacity(inputs.len());

    for (idx, input) in inputs.iter().enumerate() {
        let path = format!("{base}/users/{}", idx + 1);
        check_fields(input, &path)?;
        if !seen.insert(input.user_id) {
            return Err(CoreError::invalid_parameter(
                path,
                format!("value (user_id)=({}) already exists", input.user_id),
            ));
        }
        grants.push(ShareGrant {
            target_id: input.user_id,
            permission: permission_from_input(input.permission, &format!("{path}/permission"))?,
        });
    }

    Ok(grants)
}

fn group_grants(inputs: &[GroupShareInput], base: &str) -> Result<Vec<ShareGrant>, CoreError> {
    let mut grants = Vec::with_capacity(inputs.len());
    let mut seen = HashSet::with_capacity(inputs.len());

    for (idx, input) in inputs.iter().enumerate() {
        let path = format!("{base}/user_groups/{}", idx + 1);
        check_fields(input, &path)?;
        if !seen.insert(input.user_group_id) {
            return Err(CoreError::invalid_parameter(
                path,
                format!("value (user_group_id)=({}) already exists", input.user_group_id),
            ));
        }
        grants.push(ShareGrant {
            target_id: input.user_group_id,
            permission: permission_from_input(input.permission, &format!("{path}/permission"))?,
        });
    }

    Ok(grants)
}

fn widget_specs(inputs: &[WidgetInput], base: &str) -> Result<Vec<WidgetSpec>, CoreError> {
    inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| -> Result<WidgetSpec, CoreError> {
            let path = format!("{base}/widgets/{}", idx + 1);
            require_non_empty(&input.widget_type, &format!("{path}/type"))?;
            if input.widget_type.chars().count() > WIDGET_TYPE_MAX_LEN {
                return Err(CoreError::invalid_parameter(
                    format!("{path}/type"),
                    "value is too long",
                ));
            }
            check_fields(input, &path)?;

            Ok(WidgetSpec {
                widget_type: input.widget_type.clone(),
                name: input.name.clone().unwrap_or_default(),
                row: input.row.unwrap_or(DEFAULT_WIDGET_ROW),
                col: input.col.unwrap_or(DEFAULT_WIDGET_COL),
                height: input.height.unwrap_or(DEFAULT_WIDGET_HEIGHT),
                width: input.width.unwrap_or(DEFAULT_WIDGET_WIDTH),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::roles::UserType;

    const ME: DbId = 7;

    fn user() -> Identity {
        Identity::new(ME, UserType::User)
    }

    fn admin() -> Identity {
        Identity::new(ME, UserType::Admin)
    }

    fn create(name: &str) -> CreateDashboard {
        CreateDashboard {
            name: name.to_string(),
            user_id: None,
            private: None,
            users: None,
            user_groups: None,
            widgets: None,
        }
    }

    fn update(id: DbId) -> UpdateDashboard {
        UpdateDashboard {
            dashboard_id: id,
            name: None,
            user_id: None,
            private: None,
            users: None,
            user_groups: None,
            widgets: None,
        }
    }

    fn widget(row: i32, col: i32, height: i32, width: i32) -> WidgetInput {
        WidgetInput {
            widget_type: "clock".to_string(),
            name: None,
            row: Some(row),
            col: Some(col),
            height: Some(height),
            width: Some(width),
        }
    }

    fn invalid_parameter(err: CoreError) -> (String, String) {
        match err {
            CoreError::InvalidParameter { path, reason } => (path, reason),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    fn validation_message(err: CoreError) -> String {
        match err {
            CoreError::Validation(msg) => msg,
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    // -- Create -------------------------------------------------------------

    #[test]
    fn create_applies_defaults() {
        let mut req = create("Ops");
        req.widgets = Some(vec![WidgetInput {
            widget_type: "clock".to_string(),
            name: None,
            row: None,
            col: None,
            height: None,
            width: None,
        }]);

        let dashboards = validate_create(&[req], &user()).unwrap();
        let ops = &dashboards[0];
        assert_eq!(ops.owner_id, ME);
        assert_eq!(ops.sharing, Sharing::Private);
        assert!(ops.users.is_empty());
        assert_eq!(ops.widgets[0].height, DEFAULT_WIDGET_HEIGHT);
        assert_eq!(ops.widgets[0].width, DEFAULT_WIDGET_WIDTH);
        assert_eq!(ops.widgets[0].name, "");
    }

    #[test]
    fn empty_batch_is_rejected() {
        let (path, reason) = invalid_parameter(validate_create(&[], &user()).unwrap_err());
        assert_eq!(path, "/");
        assert_eq!(reason, "cannot be empty");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = validate_create(&[create("")], &user()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter \"/1/name\": cannot be empty."
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let err = validate_create(&[create(&"x".repeat(256))], &user()).unwrap_err();
        assert_eq!(invalid_parameter(err).0, "/1/name");
    }

    #[test]
    fn out_of_range_widget_field_reports_nested_path() {
        let mut req = create("Ops");
        req.widgets = Some(vec![widget(0, 0, 1, 1), widget(64, 0, 1, 1)]);
        let (path, reason) = invalid_parameter(validate_create(&[req], &user()).unwrap_err());
        assert_eq!(path, "/1/widgets/2/row");
        assert_eq!(reason, "value must be one of 0-63");
    }

    #[test]
    fn widget_without_type_is_rejected() {
        let mut req = create("Ops");
        let mut w = widget(0, 0, 1, 1);
        w.widget_type = String::new();
        req.widgets = Some(vec![w]);
        let (path, _) = invalid_parameter(validate_create(&[req], &user()).unwrap_err());
        assert_eq!(path, "/1/widgets/1/type");
    }

    #[test]
    fn bad_permission_is_rejected() {
        let mut req = create("Ops");
        req.users = Some(vec![UserShareInput {
            user_id: 3,
            permission: 1,
        }]);
        let (path, _) = invalid_parameter(validate_create(&[req], &user()).unwrap_err());
        assert_eq!(path, "/1/users/1/permission");
    }

    #[test]
    fn duplicate_share_target_is_rejected() {
        let mut req = create("Ops");
        req.user_groups = Some(vec![
            GroupShareInput {
                user_group_id: 4,
                permission: 2,
            },
            GroupShareInput {
                user_group_id: 4,
                permission: 3,
            },
        ]);
        let err = validate_create(&[req], &user()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter \"/1/user_groups/2\": value (user_group_id)=(4) already exists."
        );
    }

    #[test]
    fn duplicate_names_in_one_request_are_rejected() {
        let err = validate_create(&[create("Ops"), create("Net"), create("Ops")], &user())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter \"/3\": value (name)=(Ops) already exists."
        );
    }

    #[test]
    fn ordinary_user_cannot_assign_another_owner() {
        let mut req = create("Ops");
        req.user_id = Some(99);
        let err = validate_create(&[req], &user()).unwrap_err();
        assert_eq!(validation_message(err), OWNER_CHANGE_DENIED);
    }

    #[test]
    fn admin_may_assign_another_owner() {
        let mut req = create("Ops");
        req.user_id = Some(99);
        let dashboards = validate_create(&[req], &admin()).unwrap();
        assert_eq!(dashboards[0].owner_id, 99);
    }

    #[test]
    fn overlapping_widgets_fail_create() {
        let mut req = create("Ops");
        req.widgets = Some(vec![widget(0, 0, 2, 2), widget(1, 1, 2, 2)]);
        let err = validate_create(&[req], &user()).unwrap_err();
        assert_eq!(
            validation_message(err),
            "Dashboard \"Ops\" cell X - 1 Y - 1 is already taken."
        );
    }

    #[test]
    fn widget_past_the_last_column_fails_create() {
        let mut req = create("Ops");
        req.widgets = Some(vec![widget(0, 8, 1, 6)]);
        let err = validate_create(&[req], &user()).unwrap_err();
        assert!(validation_message(err).ends_with("is out of bounds."));
    }

    // -- Update -------------------------------------------------------------

    #[test]
    fn update_keeps_absent_fields_absent() {
        let patches = validate_update(&[update(5)], &user()).unwrap();
        assert_eq!(patches[0].dashboard_id, 5);
        assert_eq!(patches[0].name, None);
        assert_eq!(patches[0].users, None);
        assert_eq!(patches[0].widgets, None);
    }

    #[test]
    fn update_empty_list_means_clear() {
        let mut req = update(5);
        req.widgets = Some(vec![]);
        let patches = validate_update(&[req], &user()).unwrap();
        assert_eq!(patches[0].widgets, Some(vec![]));
    }

    #[test]
    fn update_rejects_duplicate_ids() {
        let err = validate_update(&[update(5), update(5)], &user()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter \"/2\": value (dashboard_id)=(5) already exists."
        );
    }

    #[test]
    fn update_rejects_duplicate_new_names() {
        let mut a = update(5);
        a.name = Some("Ops".to_string());
        let b = update(6);
        let mut c = update(7);
        c.name = Some("Ops".to_string());
        let (path, _) = invalid_parameter(validate_update(&[a, b, c], &user()).unwrap_err());
        assert_eq!(path, "/3");
    }

    #[test]
    fn update_rejects_non_positive_id() {
        let (path, _) = invalid_parameter(validate_update(&[update(0)], &user()).unwrap_err());
        assert_eq!(path, "/1/dashboard_id");
    }

    #[test]
    fn update_owner_rule() {
        let mut req = update(5);
        req.user_id = Some(ME);
        assert!(validate_update(&[req.clone()], &user()).is_ok());

        req.user_id = Some(8);
        assert_matches!(validate_update(&[req], &user()), Err(CoreError::Validation(_)));
    }

    #[test]
    fn patch_placement_uses_stored_name() {
        let current = DashboardState {
            id: 5,
            name: "Stored".to_string(),
            owner_id: ME,
            sharing: Sharing::Private,
        };
        let mut req = update(5);
        req.widgets = Some(vec![widget(0, 0, 1, 1), widget(0, 0, 1, 1)]);
        let patch = validate_update(&[req], &user()).unwrap().remove(0);

        let err = check_patch_placement(&patch, &current).unwrap_err();
        assert_eq!(
            validation_message(err),
            "Dashboard \"Stored\" cell X - 0 Y - 0 is already taken."
        );
    }

    #[test]
    fn changed_names_skips_unchanged_and_absent() {
        let stored = |id: DbId, name: &str| DashboardState {
            id,
            name: name.to_string(),
            owner_id: ME,
            sharing: Sharing::Private,
        };
        let current = [stored(1, "A"), stored(2, "B"), stored(3, "C")];

        let mut same = update(1);
        same.name = Some("A".to_string());
        let absent = update(2);
        let mut renamed = update(3);
        renamed.name = Some("D".to_string());
        let patches = validate_update(&[same, absent, renamed], &user()).unwrap();

        assert_eq!(changed_names(&patches, &current), vec!["D"]);
    }

    // -- Delete -------------------------------------------------------------

    #[test]
    fn delete_ids_must_be_unique_and_positive() {
        assert_eq!(validate_delete_ids(&[3, 1]).unwrap(), vec![3, 1]);
        assert_eq!(
            validate_delete_ids(&[3, 1, 3]).unwrap_err().to_string(),
            "Invalid parameter \"/3\": value (3) already exists."
        );
        assert_matches!(validate_delete_ids(&[]), Err(CoreError::InvalidParameter { .. }));
        assert_matches!(validate_delete_ids(&[-2]), Err(CoreError::InvalidParameter { .. }));
    }

    // -- References ---------------------------------------------------------

    #[test]
    fn user_refs_exclude_the_caller() {
        let mut req = create("Ops");
        req.users = Some(vec![
            UserShareInput {
                user_id: ME,
                permission: 2,
            },
            UserShareInput {
                user_id: 11,
                permission: 3,
            },
        ]);
        let mut other = create("Net");
        other.users = Some(vec![UserShareInput {
            user_id: 11,
            permission: 2,
        }]);
        let dashboards = validate_create(&[req, other], &user()).unwrap();
        assert_eq!(create_user_refs(&dashboards, &user()), vec![11]);
    }

    #[test]
    fn update_refs_include_owner_and_grants() {
        let mut req = update(5);
        req.user_id = Some(20);
        req.users = Some(vec![UserShareInput {
            user_id: 21,
            permission: 2,
        }]);
        req.user_groups = Some(vec![GroupShareInput {
            user_group_id: 30,
            permission: 2,
        }]);
        let patches = validate_update(&[req], &admin()).unwrap();
        assert_eq!(update_user_refs(&patches, &admin()), vec![20, 21]);
        assert_eq!(update_group_refs(&patches), vec![30]);
    }

    #[test]
    fn first_missing_keeps_request_order() {
        assert_eq!(first_missing(&[4, 5, 6], &[6, 4]), Some(5));
        assert_eq!(first_missing(&[4], &[4]), None);
    }

    #[test]
    fn reference_messages() {
        assert_eq!(
            missing_user(12).to_string(),
            "User with ID \"12\" is not available."
        );
        assert_eq!(
            missing_user_group(3).to_string(),
            "User group with ID \"3\" is not available."
        );
        assert_eq!(
            duplicate_name("Ops").to_string(),
            "Dashboard \"Ops\" already exists."
        );
    }
}
