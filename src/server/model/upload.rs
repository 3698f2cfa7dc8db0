use axum::body::Bytes;

/// Logo file received in a multipart request, not yet checked or written to disk
#[derive(Clone, Debug)]
pub struct LogoUpload {
    /// File name as sent by the client
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}
