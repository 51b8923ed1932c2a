//! Routed pages.

pub mod booking;
pub mod confirmed;
pub mod home;
pub mod not_found;
