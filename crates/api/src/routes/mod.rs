pub mod dashboard;
pub mod health;
pub mod popup;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /popups/action-condition                         condition popup (GET)
///
/// /dashboards                                      list, create, update, delete
/// /dashboards/{id}                                 get with grants and widgets
/// ```
///
/// Every route requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/popups", popup::router())
        .nest("/dashboards", dashboard::router())
}
