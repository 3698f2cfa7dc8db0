use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Employee summary combining employee fields with their current assignment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EmployeeDto {
    pub id: String,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: String,
    /// Whole days since the employee started at their current café, 0 when unassigned
    pub days_worked: i64,
    /// Name of the assigned café, empty when unassigned
    pub cafe: String,
    pub cafe_id: Option<String>,
}

/// Fields accepted when creating or updating an employee
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EmployeePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Café to assign the employee to, an empty string is treated as absent
    #[serde(rename = "cafeId", default, skip_serializing_if = "Option::is_none")]
    pub cafe_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| format!("Unknown gender: {}", s))
    }
}
