use cafe_roster_test_utils::prelude::*;

use crate::server::{
    data::employee_cafe::EmployeeCafeRepository,
    error::{not_found::NotFoundError, Error},
    service::assignment::{AssignmentService, AttachOutcome},
    util::time::today,
};
