use rand::Rng;

static EMPLOYEE_ID_PREFIX: &str = "UI";
static EMPLOYEE_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const EMPLOYEE_ID_SUFFIX_LEN: usize = 7;

/// Generates a random employee identifier in the `UIXXXXXXX` format.
///
/// The suffix is 7 characters drawn from `A-Z0-9`. Uniqueness is not guaranteed, callers
/// check for an existing employee before using the ID.
pub fn generate_employee_id() -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..EMPLOYEE_ID_SUFFIX_LEN)
        .map(|_| EMPLOYEE_ID_CHARSET[rng.random_range(0..EMPLOYEE_ID_CHARSET.len())] as char)
        .collect();

    format!("{}{}", EMPLOYEE_ID_PREFIX, suffix)
}
