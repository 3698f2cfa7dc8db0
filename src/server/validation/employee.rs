use crate::{
    model::employee::{EmployeePayload, Gender},
    server::{
        error::validation::ValidationError,
        model::employee::{EmployeeChanges, NewEmployee},
        validation::{non_empty, FieldRules, Presence, Rule},
    },
};

pub const NAME: FieldRules = FieldRules {
    field: "name",
    required: "Name is required",
    rules: &[
        Rule::MinChars(6, "Name must be at least 6 characters long"),
        Rule::MaxChars(10, "Name cannot exceed 10 characters"),
    ],
};

pub const EMAIL_ADDRESS: FieldRules = FieldRules {
    field: "email_address",
    required: "Email address is required",
    rules: &[Rule::Email("Invalid email format")],
};

pub const PHONE_NUMBER: FieldRules = FieldRules {
    field: "phone_number",
    required: "Phone number is required",
    rules: &[Rule::Phone(
        "Phone number must start with 8 or 9 and have 8 digits",
    )],
};

pub const GENDER: FieldRules = FieldRules {
    field: "gender",
    required: "Gender is required",
    rules: &[Rule::OneOf(
        &["Male", "Female"],
        "Gender must be either Male or Female",
    )],
};

pub const CAFE_ID: FieldRules = FieldRules {
    field: "cafeId",
    required: "Cafe ID is required",
    rules: &[Rule::Uuid("Invalid cafe ID format")],
};

/// Validated employee create request, with the optional café to assign them to
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedNewEmployee {
    pub employee: NewEmployee,
    pub cafe_id: Option<String>,
}

/// Validated employee update request, with the optional café to move them to
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedEmployeeChanges {
    pub changes: EmployeeChanges,
    pub cafe_id: Option<String>,
}

/// Validates an employee create payload, every field except `cafeId` is required
pub fn validate_new_employee(
    payload: EmployeePayload,
) -> Result<ValidatedNewEmployee, ValidationError> {
    let employee = NewEmployee {
        name: NAME.require(payload.name)?,
        email_address: EMAIL_ADDRESS.require(payload.email_address)?,
        phone_number: PHONE_NUMBER.require(payload.phone_number)?,
        gender: parse_gender(GENDER.require(payload.gender)?)?,
    };
    let cafe_id = CAFE_ID
        .check(non_empty(payload.cafe_id), Presence::Optional)?
        .map(hyphenated_lowercase);

    Ok(ValidatedNewEmployee { employee, cafe_id })
}

/// Validates an employee update payload, only provided fields are checked
pub fn validate_employee_changes(
    payload: EmployeePayload,
) -> Result<ValidatedEmployeeChanges, ValidationError> {
    let changes = EmployeeChanges {
        name: NAME.check(payload.name, Presence::Optional)?,
        email_address: EMAIL_ADDRESS.check(payload.email_address, Presence::Optional)?,
        phone_number: PHONE_NUMBER.check(payload.phone_number, Presence::Optional)?,
        gender: GENDER
            .check(payload.gender, Presence::Optional)?
            .map(parse_gender)
            .transpose()?,
    };
    let cafe_id = CAFE_ID
        .check(non_empty(payload.cafe_id), Presence::Optional)?
        .map(hyphenated_lowercase);

    Ok(ValidatedEmployeeChanges { changes, cafe_id })
}

/// Café ids are stored lowercase and hyphenated, other UUID spellings are rewritten to match
fn hyphenated_lowercase(id: String) -> String {
    uuid::Uuid::parse_str(&id)
        .map(|uuid| uuid.hyphenated().to_string())
        .unwrap_or(id)
}

fn parse_gender(value: String) -> Result<Gender, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::field(GENDER.field, "Gender must be either Male or Female"))
}
