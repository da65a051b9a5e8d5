//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the caller, decoded from a JWT Bearer token.
//! - [`rbac::RequireAuth`] -- any authenticated user.

pub mod auth;
pub mod rbac;
