/// Validated fields for a new café
#[derive(Clone, Debug, PartialEq)]
pub struct NewCafe {
    pub name: String,
    pub description: String,
    pub location: String,
    pub logo: Option<String>,
}

/// Validated partial update for a café, `None` fields are left unchanged
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CafeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
}
