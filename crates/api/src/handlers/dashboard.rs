//! Handlers for dashboard CRUD.
//!
//! Create, update and delete take a batch. Every check runs before the
//! first write, and all writes of one request share a transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgConnection;
use vigil_core::audit::{action_types, entity_types, snapshot_details};
use vigil_core::dashboard::input::{CreateDashboard, UpdateDashboard};
use vigil_core::dashboard::sync::{
    plan_share_sync, plan_widget_sync, PersistedShare, PersistedWidget, ShareSyncPlan,
    WidgetSyncPlan, WriteMode,
};
use vigil_core::dashboard::validation::{
    changed_names, check_patch_placement, create_group_refs, create_user_refs, duplicate_name,
    first_missing, missing_user, missing_user_group, update_group_refs, update_user_refs,
    validate_create, validate_delete_ids, validate_update,
};
use vigil_core::dashboard::{DashboardState, ShareGrant, WidgetSpec};
use vigil_core::error::CoreError;
use vigil_core::types::DbId;
use vigil_db::models::audit::CreateAuditLog;
use vigil_db::models::dashboard::Dashboard;
use vigil_db::repositories::{
    AuditLogRepo, DashboardRepo, DashboardShareRepo, ShareTable, UserGroupRepo, UserRepo,
    WidgetRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::{DashboardIds, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboards
pub async fn list_dashboards(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let dashboards = DashboardRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: dashboards }))
}

/// GET /api/v1/dashboards/{id}
///
/// Unknown ids answer with the same error as forbidden ones.
pub async fn get_dashboard(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = DashboardRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NoPermission))?;

    Ok(Json(DataResponse { data: detail }))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/dashboards
pub async fn create_dashboards(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<Vec<CreateDashboard>>,
) -> AppResult<impl IntoResponse> {
    let caller = user.identity();
    let dashboards = validate_create(&input, &caller)?;

    let mut tx = state.pool.begin().await?;

    let names: Vec<&str> = dashboards.iter().map(|d| d.name.as_str()).collect();
    if let Some(taken) = DashboardRepo::existing_names(&mut *tx, &names).await?.first() {
        return Err(duplicate_name(taken).into());
    }
    check_users(&mut *tx, &create_user_refs(&dashboards, &caller)).await?;
    check_user_groups(&mut *tx, &create_group_refs(&dashboards)).await?;

    let rows = DashboardRepo::insert_many(&mut *tx, &dashboards).await?;
    if rows.len() != dashboards.len() {
        return Err(CoreError::Internal(format!(
            "inserted {} of {} dashboards",
            rows.len(),
            dashboards.len()
        ))
        .into());
    }

    let children: Vec<ChildLists<'_>> = rows
        .iter()
        .zip(&dashboards)
        .map(|(row, d)| ChildLists {
            dashboard_id: row.id,
            users: Some(d.users.as_slice()),
            user_groups: Some(d.user_groups.as_slice()),
            widgets: Some(d.widgets.as_slice()),
        })
        .collect();
    sync_children(&mut *tx, WriteMode::Create, &children).await?;

    let entries: Vec<CreateAuditLog> = rows
        .iter()
        .zip(&dashboards)
        .map(|(row, d)| CreateAuditLog {
            user_id: Some(caller.user_id),
            action_type: action_types::ENTITY_CREATE.to_string(),
            entity_type: entity_types::DASHBOARD.to_string(),
            entity_id: Some(row.id),
            details_json: Some(snapshot_details::<(), _>(None, Some(d))),
        })
        .collect();
    AuditLogRepo::batch_insert(&mut *tx, &entries).await?;

    tx.commit().await?;

    let dashboard_ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
    tracing::info!(
        user_id = caller.user_id,
        count = dashboard_ids.len(),
        ?dashboard_ids,
        "Dashboards created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: DashboardIds { dashboard_ids },
        }),
    ))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PUT /api/v1/dashboards
pub async fn update_dashboards(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<Vec<UpdateDashboard>>,
) -> AppResult<impl IntoResponse> {
    let caller = user.identity();
    let patches = validate_update(&input, &caller)?;
    let ids: Vec<DbId> = patches.iter().map(|p| p.dashboard_id).collect();

    let mut tx = state.pool.begin().await?;

    let stored = DashboardRepo::find_by_ids(&mut *tx, &ids).await?;
    if stored.len() != ids.len() {
        return Err(CoreError::NoPermission.into());
    }
    let current = states_of(&stored)?;

    let names = changed_names(&patches, &current);
    if let Some(taken) = DashboardRepo::existing_names(&mut *tx, &names).await?.first() {
        return Err(duplicate_name(taken).into());
    }
    check_users(&mut *tx, &update_user_refs(&patches, &caller)).await?;
    check_user_groups(&mut *tx, &update_group_refs(&patches)).await?;

    let mut pairs = Vec::with_capacity(patches.len());
    for patch in &patches {
        let before = current
            .iter()
            .find(|s| s.id == patch.dashboard_id)
            .ok_or(AppError::Core(CoreError::NoPermission))?;
        check_patch_placement(patch, before)?;
        pairs.push((patch, before));
    }

    let changes: Vec<_> = pairs
        .iter()
        .filter_map(|(patch, before)| {
            patch
                .scalar_changes(before)
                .map(|c| (patch.dashboard_id, c))
        })
        .collect();
    DashboardRepo::update_many(&mut *tx, &changes).await?;

    let children: Vec<ChildLists<'_>> = patches
        .iter()
        .map(|p| ChildLists {
            dashboard_id: p.dashboard_id,
            users: p.users.as_deref(),
            user_groups: p.user_groups.as_deref(),
            widgets: p.widgets.as_deref(),
        })
        .collect();
    sync_children(&mut *tx, WriteMode::Update, &children).await?;

    let entries: Vec<CreateAuditLog> = pairs
        .iter()
        .map(|(patch, before)| CreateAuditLog {
            user_id: Some(caller.user_id),
            action_type: action_types::ENTITY_UPDATE.to_string(),
            entity_type: entity_types::DASHBOARD.to_string(),
            entity_id: Some(patch.dashboard_id),
            details_json: Some(snapshot_details(Some(*before), Some(*patch))),
        })
        .collect();
    AuditLogRepo::batch_insert(&mut *tx, &entries).await?;

    tx.commit().await?;

    tracing::info!(
        user_id = caller.user_id,
        count = ids.len(),
        scalar_updates = changes.len(),
        ?ids,
        "Dashboards updated",
    );

    Ok(Json(DataResponse {
        data: DashboardIds { dashboard_ids: ids },
    }))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /api/v1/dashboards
///
/// Body is a JSON array of dashboard ids.
pub async fn delete_dashboards(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<Vec<DbId>>,
) -> AppResult<impl IntoResponse> {
    let caller = user.identity();
    let ids = validate_delete_ids(&input)?;

    let mut tx = state.pool.begin().await?;

    let stored = DashboardRepo::find_by_ids(&mut *tx, &ids).await?;
    if stored.len() != ids.len() {
        return Err(CoreError::NoPermission.into());
    }

    DashboardRepo::delete_many(&mut *tx, &ids).await?;

    let entries: Vec<CreateAuditLog> = stored
        .iter()
        .map(|row| CreateAuditLog {
            user_id: Some(caller.user_id),
            action_type: action_types::ENTITY_DELETE.to_string(),
            entity_type: entity_types::DASHBOARD.to_string(),
            entity_id: Some(row.id),
            details_json: Some(snapshot_details::<_, ()>(Some(row), None)),
        })
        .collect();
    AuditLogRepo::batch_insert(&mut *tx, &entries).await?;

    tx.commit().await?;

    tracing::info!(user_id = caller.user_id, count = ids.len(), ?ids, "Dashboards deleted");

    Ok(Json(DataResponse {
        data: DashboardIds { dashboard_ids: ids },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Desired child lists of one dashboard. `None` leaves the relation alone.
struct ChildLists<'a> {
    dashboard_id: DbId,
    users: Option<&'a [ShareGrant]>,
    user_groups: Option<&'a [ShareGrant]>,
    widgets: Option<&'a [WidgetSpec]>,
}

fn states_of(rows: &[Dashboard]) -> AppResult<Vec<DashboardState>> {
    rows.iter()
        .map(|row| row.state().map_err(undecodable_row))
        .collect()
}

fn undecodable_row(reason: String) -> AppError {
    CoreError::Internal(reason).into()
}

async fn check_users(conn: &mut PgConnection, ids: &[DbId]) -> AppResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let found = UserRepo::existing_ids(conn, ids).await?;
    match first_missing(ids, &found) {
        Some(id) => Err(missing_user(id).into()),
        None => Ok(()),
    }
}

async fn check_user_groups(conn: &mut PgConnection, ids: &[DbId]) -> AppResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let found = UserGroupRepo::existing_ids(conn, ids).await?;
    match first_missing(ids, &found) {
        Some(id) => Err(missing_user_group(id).into()),
        None => Ok(()),
    }
}

/// Bring all three child relations of the given dashboards in line with
/// the desired lists, one statement per kind per relation.
async fn sync_children(
    conn: &mut PgConnection,
    mode: WriteMode,
    dashboards: &[ChildLists<'_>],
) -> AppResult<()> {
    let users: Vec<_> = dashboards
        .iter()
        .filter_map(|d| d.users.map(|g| (d.dashboard_id, g)))
        .collect();
    sync_shares(&mut *conn, mode, ShareTable::Users, &users).await?;

    let groups: Vec<_> = dashboards
        .iter()
        .filter_map(|d| d.user_groups.map(|g| (d.dashboard_id, g)))
        .collect();
    sync_shares(&mut *conn, mode, ShareTable::UserGroups, &groups).await?;

    let widgets: Vec<_> = dashboards
        .iter()
        .filter_map(|d| d.widgets.map(|w| (d.dashboard_id, w)))
        .collect();
    sync_widgets(conn, mode, &widgets).await
}

async fn sync_shares(
    conn: &mut PgConnection,
    mode: WriteMode,
    table: ShareTable,
    wanted: &[(DbId, &[ShareGrant])],
) -> AppResult<()> {
    if wanted.is_empty() {
        return Ok(());
    }

    let persisted: Vec<PersistedShare> = if mode.reads_persisted() {
        let ids: Vec<DbId> = wanted.iter().map(|(id, _)| *id).collect();
        DashboardShareRepo::list_for_dashboards(&mut *conn, table, &ids)
            .await?
            .iter()
            .map(|row| row.to_persisted().map_err(undecodable_row))
            .collect::<AppResult<_>>()?
    } else {
        Vec::new()
    };

    let mut plan = ShareSyncPlan::default();
    for (dashboard_id, grants) in wanted {
        let rows: Vec<PersistedShare> = persisted
            .iter()
            .filter(|p| p.dashboard_id == *dashboard_id)
            .cloned()
            .collect();
        plan.merge(plan_share_sync(*dashboard_id, grants, &rows));
    }

    if !plan.is_empty() {
        DashboardShareRepo::apply(conn, table, &plan).await?;
    }
    Ok(())
}

async fn sync_widgets(
    conn: &mut PgConnection,
    mode: WriteMode,
    wanted: &[(DbId, &[WidgetSpec])],
) -> AppResult<()> {
    if wanted.is_empty() {
        return Ok(());
    }

    let persisted: Vec<PersistedWidget> = if mode.reads_persisted() {
        let ids: Vec<DbId> = wanted.iter().map(|(id, _)| *id).collect();
        WidgetRepo::list_for_dashboards(&mut *conn, &ids)
            .await?
            .iter()
            .map(|row| row.to_persisted())
            .collect()
    } else {
        Vec::new()
    };

    let mut plan = WidgetSyncPlan::default();
    for (dashboard_id, specs) in wanted {
        let rows: Vec<PersistedWidget> = persisted
            .iter()
            .filter(|p| p.dashboard_id == *dashboard_id)
            .cloned()
            .collect();
        plan.merge(plan_widget_sync(*dashboard_id, specs, &rows));
    }

    if !plan.is_empty() {
        WidgetRepo::apply(conn, &plan).await?;
    }
    Ok(())
}
