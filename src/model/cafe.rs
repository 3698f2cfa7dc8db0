use serde::{Deserialize, Serialize};

/// Café summary returned by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CafeDto {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Public path of the uploaded logo, e.g. `uploads/logos/1700000000000-logo.png`
    pub logo: Option<String>,
    pub location: String,
    /// Number of employees currently assigned to the café
    pub employees: u64,
}

/// Fields accepted when creating or updating a café.
///
/// Every field is optional at the type level; which ones are required depends on whether
/// the payload is used for a create or an update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CafePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}
