use crate::{
    model::cafe::CafePayload,
    server::{
        error::validation::ValidationError,
        model::cafe::{CafeChanges, NewCafe},
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

pub const DESCRIPTION: FieldRules = FieldRules {
    field: "description",
    required: "Description is required",
    rules: &[Rule::MaxChars(256, "Description cannot exceed 256 characters")],
};

pub const LOCATION: FieldRules = FieldRules {
    field: "location",
    required: "Location is required",
    rules: &[],
};

/// Validates a café create payload, every field except `logo` is required
pub fn validate_new_cafe(payload: CafePayload) -> Result<NewCafe, ValidationError> {
    Ok(NewCafe {
        name: NAME.require(payload.name)?,
        description: DESCRIPTION.require(payload.description)?,
        location: LOCATION.require(payload.location)?,
        logo: non_empty(payload.logo),
    })
}

/// Validates a café update payload, only provided fields are checked
pub fn validate_cafe_changes(payload: CafePayload) -> Result<CafeChanges, ValidationError> {
    Ok(CafeChanges {
        name: NAME.check(payload.name, Presence::Optional)?,
        description: DESCRIPTION.check(payload.description, Presence::Optional)?,
        location: LOCATION.check(payload.location, Presence::Optional)?,
        logo: non_empty(payload.logo),
    })
}
