use axum::body::Bytes;
use cafe_roster_test_utils::prelude::*;

use crate::{
    model::cafe::CafePayload,
    server::{
        data::{cafe::CafeRepository, employee::EmployeeRepository},
        error::{
            not_found::NotFoundError, upload::UploadError, validation::ValidationError, Error,
        },
        model::upload::LogoUpload,
        service::{cafe::CafeService, upload::LogoStore},
    },
};


fn payload(name: &str, location: &str) -> CafePayload {
    CafePayload {
        name: Some(name.to_string()),
        description: Some("Coffee".to_string()),
        location: Some(location.to_string()),
        logo: None,
    }
}

fn png_logo(len: usize) -> LogoUpload {
    LogoUpload {
        file_name: "logo.png".to_string(),
        content_type: Some("image/png".to_string()),
        data: Bytes::from(vec![1u8; len]),
    }
}

fn logo_store(test: &TestContext) -> LogoStore {
    LogoStore::new(test.upload_path().to_path_buf())
}

fn stored_logo_count(test: &TestContext) -> usize {
    std::fs::read_dir(test.upload_path().join("logos"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}
