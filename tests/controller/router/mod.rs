mod cors;
mod multipart;
mod scenario;

use axum::{
    body::Body,
    http::{header, Method, Request},
};
use cafe_roster::model::{cafe::CafeDto, employee::EmployeeDto};
use serde_json::json;

use super::*;
use crate::util::{error_message, json_request, read_json, send};
