//! Server application core modules.
//!
//! This module contains all server-side functionality for the café roster, including HTTP
//! routing, request validation, logo uploads, database access, and the employee assignment
//! logic that ties employees to cafés and derives their tenure.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod util;
pub mod validation;
