pub mod audit;
pub mod dashboard;
pub mod preference;
pub mod share;
pub mod user;
pub mod widget;
