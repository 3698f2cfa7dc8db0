/// Formats days worked for the employee table
pub fn format_days_worked(days: i64) -> String {
    match days {
        days if days <= 0 => "Less than a day".to_string(),
        1 => "1 day".to_string(),
        days => format!("{} days", days),
    }
}

/// Stored logos are relative paths like `uploads/logos/x.png`, anything else is used as is
pub fn logo_src(logo: &str) -> String {
    if logo.starts_with("uploads/") {
        format!("/{}", logo)
    } else {
        logo.to_string()
    }
}
