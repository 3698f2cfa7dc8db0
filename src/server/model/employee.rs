use crate::model::employee::Gender;

/// Validated fields for a new employee
#[derive(Clone, Debug, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
}

/// Validated partial update for an employee, `None` fields are left unchanged
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<Gender>,
}
