//! Declarative request validation.
//!
//! Each payload field is described by a [`FieldRules`] constant listing the rules its value
//! must satisfy. The create and update rule sets share the same constants and differ only in
//! [`Presence`]: create requires every mandatory field, update checks whatever is provided.
//! Checks run field by field in declaration order and stop at the first violation.

pub mod cafe;
pub mod employee;

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::validation::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[89]\d{7}$").expect("phone pattern is valid"));

/// Whether a field must be present in the payload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// Missing or blank values fail with the field's required message
    Required,
    /// Missing values are skipped, blank values still fail with the required message
    Optional,
}

/// A single check applied to a present field value
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    /// At least this many characters
    MinChars(usize, &'static str),
    /// At most this many characters
    MaxChars(usize, &'static str),
    Email(&'static str),
    /// 8 digits starting with 8 or 9
    Phone(&'static str),
    OneOf(&'static [&'static str], &'static str),
    Uuid(&'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        let passes = match self {
            Self::MinChars(min, _) => value.chars().count() >= *min,
            Self::MaxChars(max, _) => value.chars().count() <= *max,
            Self::Email(_) => EMAIL_PATTERN.is_match(value),
            Self::Phone(_) => PHONE_PATTERN.is_match(value),
            Self::OneOf(allowed, _) => allowed.contains(&value),
            Self::Uuid(_) => uuid::Uuid::parse_str(value).is_ok(),
        };

        if passes {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::MinChars(_, message)
            | Self::MaxChars(_, message)
            | Self::Email(message)
            | Self::Phone(message)
            | Self::OneOf(_, message)
            | Self::Uuid(message) => message,
        }
    }
}

/// Rules declared for one payload field
#[derive(Clone, Copy, Debug)]
pub struct FieldRules {
    pub field: &'static str,
    /// Message used when the field is required but missing or blank
    pub required: &'static str,
    pub rules: &'static [Rule],
}

impl FieldRules {
    /// Checks a field value, returning the value when present and valid.
    ///
    /// # Returns
    /// - `Ok(Some(value))` - Value present and satisfies every rule
    /// - `Ok(None)` - Value absent and the field is optional
    /// - `Err(ValidationError::Field)` - First violated rule
    pub fn check(
        &self,
        value: Option<String>,
        presence: Presence,
    ) -> Result<Option<String>, ValidationError> {
        let value = match value {
            None if presence == Presence::Optional => return Ok(None),
            None => return Err(ValidationError::field(self.field, self.required)),
            Some(value) if value.trim().is_empty() && self.rejects_blank() => {
                return Err(ValidationError::field(self.field, self.required));
            }
            Some(value) => value,
        };

        for rule in self.rules {
            rule.check(&value)
                .map_err(|message| ValidationError::field(self.field, message))?;
        }

        Ok(Some(value))
    }

    /// Like [`FieldRules::check`] for fields that are always present once validated.
    pub fn require(&self, value: Option<String>) -> Result<String, ValidationError> {
        self.check(value, Presence::Required)?
            .ok_or_else(|| ValidationError::field(self.field, self.required))
    }

    // Fields with a minimum length report the length message for blank values instead.
    fn rejects_blank(&self) -> bool {
        !self
            .rules
            .iter()
            .any(|rule| matches!(rule, Rule::MinChars(..)))
    }
}

/// Treats an empty string as an absent value, used for optional references and filters.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
