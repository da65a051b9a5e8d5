//! Handler for the "new action condition" popup.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use vigil_core::condition::popup::{assemble, PopupQuery, LAST_TYPE_PREFERENCE};
use vigil_core::types::DbId;
use vigil_db::repositories::PreferenceRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/popups/action-condition
///
/// Render the popup for an event source. When a condition is submitted it
/// is validated, and its type becomes the caller's remembered choice for
/// that source. A failed preference write is logged, not returned.
pub async fn show_action_condition_popup(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<PopupQuery>,
) -> AppResult<impl IntoResponse> {
    let request = query.parse()?;
    let discriminator = DbId::from(request.source.code());

    let stored =
        PreferenceRepo::get_int(&state.pool, user.user_id, LAST_TYPE_PREFERENCE, discriminator)
            .await?;

    let outcome = assemble(&request, stored, state.condition_validator.as_ref());

    if let Some(condition_type) = outcome.preference_update {
        // Best effort: the popup renders even if the choice is not remembered.
        match PreferenceRepo::set_int(
            &state.pool,
            user.user_id,
            LAST_TYPE_PREFERENCE,
            discriminator,
            condition_type.code(),
        )
        .await
        {
            Ok(_) => tracing::debug!(
                user_id = user.user_id,
                source = request.source.code(),
                condition_type = condition_type.code(),
                "Remembered last condition type",
            ),
            Err(e) => tracing::warn!(
                error = %e,
                user_id = user.user_id,
                source = request.source.code(),
                "Failed to store last condition type",
            ),
        }
    }

    Ok(Json(DataResponse { data: outcome.data }))
}
