//! Data transfer objects shared by the server API and the web client.

pub mod api;
pub mod cafe;
pub mod employee;
