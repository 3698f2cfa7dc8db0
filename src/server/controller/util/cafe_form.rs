use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use utoipa::ToSchema;

use crate::{
    model::cafe::CafePayload,
    server::{
        controller::util::json_body,
        error::{upload::UploadError, Error},
        model::upload::LogoUpload,
    },
};

/// Café create/update body, read from either `multipart/form-data` or JSON.
///
/// Multipart requests carry the text fields `name`, `description`, `location` and an optional
/// `logo` file. A `logo` part without a file name is read as a logo path, the same as the
/// `logo` string in a JSON body.
#[derive(Clone, Debug, Default)]
pub struct CafeForm {
    pub payload: CafePayload,
    pub logo: Option<LogoUpload>,
}

/// OpenAPI description of the multipart café body
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CafeUploadForm {
    name: String,
    description: String,
    location: String,
    /// JPEG, PNG or GIF image, at most 2MB
    #[schema(value_type = Option<String>, format = Binary)]
    logo: Option<Vec<u8>>,
}

impl<S> FromRequest<S> for CafeForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let payload = json_body(Json::<CafePayload>::from_request(req, state).await)?;

            return Ok(Self {
                payload,
                logo: None,
            });
        }

        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| UploadError::Multipart(rejection.body_text()))?;

        Self::from_multipart(multipart).await
    }
}

impl CafeForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, Error> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| UploadError::Multipart(err.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "logo" {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|err| UploadError::Multipart(err.body_text()))?;

                match file_name {
                    // Browsers send an empty file part when no file was picked
                    Some(file_name) if file_name.is_empty() && data.is_empty() => {}
                    Some(file_name) => {
                        form.logo = Some(LogoUpload {
                            file_name,
                            content_type,
                            data,
                        });
                    }
                    None => form.payload.logo = Some(String::from_utf8_lossy(&data).into_owned()),
                }

                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|err| UploadError::Multipart(err.body_text()))?;

            match name.as_str() {
                "name" => form.payload.name = Some(value),
                "description" => form.payload.description = Some(value),
                "location" => form.payload.location = Some(value),
                _ => {}
            }
        }

        Ok(form)
    }
}
