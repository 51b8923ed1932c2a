//! Reusable widgets shared by the pages.

pub mod living_system;
pub mod ops_dashboard;
pub mod reveal;
