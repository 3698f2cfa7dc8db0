//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared by services: identifier generation,
//! tenure calculation, and the scoped database transaction wrapper.

pub mod id;
pub mod time;
pub mod transaction;
