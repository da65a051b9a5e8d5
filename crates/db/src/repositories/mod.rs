//! Repository layer.
//!
//! Each repository is a zero-sized struct. Standalone reads take `&PgPool`;
//! anything that runs inside a request transaction takes `&mut PgConnection`.

pub mod audit_repo;
pub mod dashboard_repo;
pub mod preference_repo;
pub mod share_repo;
pub mod user_repo;
pub mod widget_repo;

pub use audit_repo::AuditLogRepo;
pub use dashboard_repo::DashboardRepo;
pub use preference_repo::PreferenceRepo;
pub use share_repo::{DashboardShareRepo, ShareTable};
pub use user_repo::{UserGroupRepo, UserRepo};
pub use widget_repo::WidgetRepo;
