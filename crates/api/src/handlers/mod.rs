pub mod condition_popup;
pub mod dashboard;
