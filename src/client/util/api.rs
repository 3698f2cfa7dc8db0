//! Browser client for the roster API.
//!
//! Requests are only sent from the `web` build; other builds get [`ApiError::Network`] since
//! components fetch from effects, which never run during server rendering.

use std::fmt;

use cafe_roster::model::{
    api::SuccessDto,
    cafe::{CafeDto, CafePayload},
    employee::{EmployeeDto, EmployeePayload},
};
use serde::{de::DeserializeOwned, Serialize};
use url::form_urlencoded;

/// Failure of an API request as shown to the user
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The request never reached the server
    Network,
    /// The server answered with an error, holds the envelope's message
    Response(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("Network error. Please check your internet connection."),
            Self::Response(message) => f.write_str(message),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

pub async fn get_cafes(location: String) -> Result<Vec<CafeDto>, ApiError> {
    let url = with_query("/cafes", "location", &location);

    request(Method::Get, url, None::<&()>).await
}

pub async fn get_cafe(id: String) -> Result<CafeDto, ApiError> {
    request(Method::Get, format!("/cafes/{}", id), None::<&()>).await
}

pub async fn create_cafe(payload: CafePayload) -> Result<CafeDto, ApiError> {
    request(Method::Post, "/cafe".to_string(), Some(&payload)).await
}

pub async fn update_cafe(id: String, payload: CafePayload) -> Result<CafeDto, ApiError> {
    request(Method::Put, format!("/cafe/{}", id), Some(&payload)).await
}

/// Creates a café with an uploaded logo, sent as `multipart/form-data`
pub async fn create_cafe_with_logo(
    payload: CafePayload,
    logo: LogoFile,
) -> Result<CafeDto, ApiError> {
    send_cafe_form(Method::Post, "/cafe".to_string(), &payload, &logo).await
}

pub async fn update_cafe_with_logo(
    id: String,
    payload: CafePayload,
    logo: LogoFile,
) -> Result<CafeDto, ApiError> {
    send_cafe_form(Method::Put, format!("/cafe/{}", id), &payload, &logo).await
}

pub async fn delete_cafe(id: String) -> Result<SuccessDto, ApiError> {
    request(Method::Delete, format!("/cafe/{}", id), None::<&()>).await
}

pub async fn get_employees(cafe_id: String) -> Result<Vec<EmployeeDto>, ApiError> {
    let url = with_query("/employees", "cafe", &cafe_id);

    request(Method::Get, url, None::<&()>).await
}

pub async fn get_employee(id: String) -> Result<EmployeeDto, ApiError> {
    request(Method::Get, format!("/employees/{}", id), None::<&()>).await
}

pub async fn create_employee(payload: EmployeePayload) -> Result<EmployeeDto, ApiError> {
    request(Method::Post, "/employee".to_string(), Some(&payload)).await
}

pub async fn update_employee(
    id: String,
    payload: EmployeePayload,
) -> Result<EmployeeDto, ApiError> {
    request(Method::Put, format!("/employee/{}", id), Some(&payload)).await
}

pub async fn delete_employee(id: String) -> Result<SuccessDto, ApiError> {
    request(Method::Delete, format!("/employee/{}", id), None::<&()>).await
}

/// Id of the café form's file input
pub const LOGO_INPUT_ID: &str = "cafe-logo";

/// Largest logo the server accepts
pub const MAX_LOGO_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

/// Logo picked in a file input, only readable in the browser
#[derive(Clone, Debug)]
pub struct LogoFile {
    #[cfg(feature = "web")]
    file: web_sys::File,
    pub name: String,
    pub size: f64,
}

impl LogoFile {
    /// The file currently chosen in the `<input type="file">` with the given id
    #[cfg(feature = "web")]
    pub fn from_input(input_id: &str) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let input = web_sys::window()?
            .document()?
            .get_element_by_id(input_id)?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()?;
        let file = input.files()?.get(0)?;

        Some(Self {
            name: file.name(),
            size: file.size(),
            file,
        })
    }

    #[cfg(not(feature = "web"))]
    pub fn from_input(_input_id: &str) -> Option<Self> {
        None
    }

    pub fn too_large(&self) -> bool {
        self.size > MAX_LOGO_BYTES
    }
}

#[cfg(feature = "web")]
fn open(method: Method, url: &str) -> reqwasm::http::Request {
    use reqwasm::http::Request;

    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

#[cfg(feature = "web")]
async fn request<T, B>(method: Method, url: String, body: Option<&B>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let mut request = open(method, &url);

    if let Some(body) = body {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Response(format!("Failed to encode request: {}", e)))?;
        request = request.header("Content-Type", "application/json").body(body);
    }

    let response = request.send().await.map_err(|_| ApiError::Network)?;

    read_response(response).await
}

#[cfg(not(feature = "web"))]
async fn request<T, B>(_method: Method, _url: String, _body: Option<&B>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    Err(ApiError::Network)
}

/// Text fields plus the `logo` file part. The browser sets the multipart boundary header.
#[cfg(feature = "web")]
async fn send_cafe_form<T>(
    method: Method,
    url: String,
    payload: &CafePayload,
    logo: &LogoFile,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let form_error = |_| ApiError::Response("Failed to encode request".to_string());

    let form = web_sys::FormData::new().map_err(form_error)?;
    let fields = [
        ("name", &payload.name),
        ("description", &payload.description),
        ("location", &payload.location),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            form.append_with_str(key, value).map_err(form_error)?;
        }
    }
    form.append_with_blob_and_filename("logo", &logo.file, &logo.name)
        .map_err(form_error)?;

    let response = open(method, &url)
        .body(form)
        .send()
        .await
        .map_err(|_| ApiError::Network)?;

    read_response(response).await
}

#[cfg(not(feature = "web"))]
async fn send_cafe_form<T>(
    _method: Method,
    _url: String,
    _payload: &CafePayload,
    _logo: &LogoFile,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    Err(ApiError::Network)
}

#[cfg(feature = "web")]
async fn read_response<T: DeserializeOwned>(
    response: reqwasm::http::Response,
) -> Result<T, ApiError> {
    use cafe_roster::model::api::ErrorDto;

    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Response(format!("Failed to parse response: {}", e)));
    }

    let status = response.status();
    match response.json::<ErrorDto>().await {
        Ok(error_dto) => Err(ApiError::Response(error_dto.error.message)),
        Err(_) => Err(ApiError::Response(format!(
            "Request failed with status {}",
            status
        ))),
    }
}

/// Appends `?key=value` unless the value is empty
fn with_query(path: &str, key: &str, value: &str) -> String {
    if value.is_empty() {
        return path.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();

    format!("{}?{}", path, query)
}
