//! Route definitions for dashboards.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes mounted at `/dashboards`.
///
/// Writes take a JSON array and act on the whole batch.
///
/// ```text
/// GET    /       -> list_dashboards
/// POST   /       -> create_dashboards
/// PUT    /       -> update_dashboards
/// DELETE /       -> delete_dashboards
/// GET    /{id}   -> get_dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(dashboard::list_dashboards)
                .post(dashboard::create_dashboards)
                .put(dashboard::update_dashboards)
                .delete(dashboard::delete_dashboards),
        )
        .route("/{id}", get(dashboard::get_dashboard))
}
