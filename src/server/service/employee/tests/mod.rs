use cafe_roster_test_utils::prelude::*;

use crate::{
    model::employee::EmployeePayload,
    server::{
        data::{employee::EmployeeRepository, employee_cafe::EmployeeCafeRepository},
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        service::employee::EmployeeService,
    },
};


const CAFE_ID: &str = "0b0c8f3e-3a4e-4d59-9a53-6f1f0d6c1a01";
const OTHER_CAFE_ID: &str = "5d7e2a44-91c6-4b8e-8f0d-2a6c4e9b7f02";

fn payload(cafe_id: Option<&str>) -> EmployeePayload {
    EmployeePayload {
        name: Some("JohnDoeX".to_string()),
        email_address: Some("j@x.com".to_string()),
        phone_number: Some("98765432".to_string()),
        gender: Some("Male".to_string()),
        cafe_id: cafe_id.map(str::to_string),
    }
}
