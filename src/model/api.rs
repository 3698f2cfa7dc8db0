use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// Always `false`
    pub success: bool,
    pub error: ErrorDetailDto,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDetailDto {
    /// The error message
    pub message: String,
    /// Underlying error, only present in development builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetailDto {
                message: message.into(),
                detail: None,
            },
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.error.detail = Some(detail.into());
        self
    }
}

/// The response when a delete request succeeds
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SuccessDto {
    pub success: bool,
    pub message: String,
}

impl SuccessDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Liveness probe response
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
