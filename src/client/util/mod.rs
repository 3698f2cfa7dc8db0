pub mod api;
pub mod format;
pub mod leave_guard;
pub mod pagination;
pub mod validation;
