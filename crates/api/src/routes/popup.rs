use axum::routing::get;
use axum::Router;

use crate::handlers::condition_popup;
use crate::state::AppState;

/// Popup routes mounted at `/popups`.
///
/// ```text
/// GET /action-condition -> show_action_condition_popup
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/action-condition",
        get(condition_popup::show_action_condition_popup),
    )
}
