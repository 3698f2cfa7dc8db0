//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, validated inputs for café and employee writes, and the
//! in-memory representation of uploaded logos.

pub mod app;
pub mod cafe;
pub mod db;
pub mod employee;
pub mod upload;
