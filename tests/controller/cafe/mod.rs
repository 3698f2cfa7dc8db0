mod create_cafe;
mod delete_cafe;
mod get_cafes;
mod update_cafe;

use cafe_roster::{
    model::cafe::{CafeDto, CafePayload},
    server::{
        controller::{
            cafe::{create_cafe, delete_cafe, get_cafe, get_cafes, update_cafe, CafeQuery},
            util::cafe_form::CafeForm,
        },
        model::upload::LogoUpload,
    },
};

use super::*;
use crate::util::{error_message, read_json};

fn form(name: &str, description: &str, location: &str) -> CafeForm {
    CafeForm {
        payload: CafePayload {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            location: Some(location.to_string()),
            logo: None,
        },
        logo: None,
    }
}
