//! Form checks run before submitting, mirroring the server's rules and messages.

pub fn validate_cafe_form(
    name: &str,
    description: &str,
    location: &str,
) -> Result<(), &'static str> {
    check_name(name)?;

    if description.trim().is_empty() {
        return Err("Description is required");
    }
    if description.chars().count() > 256 {
        return Err("Description cannot exceed 256 characters");
    }
    if location.trim().is_empty() {
        return Err("Location is required");
    }

    Ok(())
}

pub fn validate_employee_form(
    name: &str,
    email_address: &str,
    phone_number: &str,
    gender: &str,
) -> Result<(), &'static str> {
    check_name(name)?;

    if email_address.trim().is_empty() {
        return Err("Email address is required");
    }
    if !is_valid_email(email_address) {
        return Err("Invalid email format");
    }
    if phone_number.trim().is_empty() {
        return Err("Phone number is required");
    }
    if !is_valid_phone(phone_number) {
        return Err("Phone number must start with 8 or 9 and have 8 digits");
    }
    if gender.is_empty() {
        return Err("Gender is required");
    }

    Ok(())
}

fn check_name(name: &str) -> Result<(), &'static str> {
    let length = name.chars().count();

    if name.is_empty() {
        Err("Name is required")
    } else if length < 6 {
        Err("Name must be at least 6 characters long")
    } else if length > 10 {
        Err("Name cannot exceed 10 characters")
    } else {
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace and a single `@`
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// 8 digits starting with 8 or 9
fn is_valid_phone(value: &str) -> bool {
    value.len() == 8
        && value.chars().all(|c| c.is_ascii_digit())
        && matches!(value.chars().next(), Some('8' | '9'))
}
