//! Vigil core domain logic.
//!
//! Pure functions and types shared by the database and API layers. This
//! crate performs no I/O; everything it needs is passed in by the caller.

pub mod audit;
pub mod condition;
pub mod dashboard;
pub mod error;
pub mod identity;
pub mod roles;
pub mod types;
