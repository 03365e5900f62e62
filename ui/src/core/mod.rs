//! Platform glue and small helpers shared by the views.

pub mod format;
pub mod platform;
pub mod session;
