use axum::body::Bytes;
use cafe_roster_test_utils::prelude::*;

use crate::server::{
    error::{upload::UploadError, Error},
    model::upload::LogoUpload,
    service::upload::{sanitize_file_name, LogoStore, MAX_LOGO_BYTES},
};


fn logo(file_name: &str, content_type: &str, len: usize) -> LogoUpload {
    LogoUpload {
        file_name: file_name.to_string(),
        content_type: Some(content_type.to_string()),
        data: Bytes::from(vec![0u8; len]),
    }
}
