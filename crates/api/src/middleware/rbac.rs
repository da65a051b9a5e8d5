//! Access control extractors.
//!
//! Dashboard visibility is not role-gated; write rules that depend on the
//! caller's user type are enforced in `vigil_core` from the [`AuthUser`]
//! identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires any authenticated user.
///
/// Equivalent to [`AuthUser`], named so route handlers read as
/// "authentication required".
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
