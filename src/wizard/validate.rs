//! Field-level validation for the personal-info step.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// `localpart@domain.tld` with no whitespace or extra `@` in any part.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// The three required fields collected on step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field failed validation, carrying the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub message: &'static str,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validates a single field value. Empty-after-trim always fails; email
/// additionally has to match the address pattern.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError {
            message: REQUIRED_MESSAGE,
        });
    }
    if field == Field::Email && !is_valid_email(value) {
        return Err(FieldError {
            message: EMAIL_MESSAGE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_required() {
        for field in Field::ALL {
            let err = validate_field(field, "   ").unwrap_err();
            assert_eq!(err.message, REQUIRED_MESSAGE);
        }
    }

    #[test]
    fn email_pattern_accepts_plain_addresses() {
        for candidate in ["user@example.com", "a@b.co", "first.last@mail.example.org"] {
            assert!(is_valid_email(candidate), "rejected {candidate}");
        }
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        for candidate in [
            "plainaddress",
            "missing-at.example.com",
            "no-tld@example",
            "two@@example.com",
            "spaces in@example.com",
            "@example.com",
            "user@",
        ] {
            assert!(!is_valid_email(candidate), "accepted {candidate}");
        }
    }

    #[test]
    fn email_field_reports_the_specific_message() {
        let err = validate_field(Field::Email, "not-an-email").unwrap_err();
        assert_eq!(err.message, EMAIL_MESSAGE);
        assert!(validate_field(Field::Email, "user@example.com").is_ok());
    }

    #[test]
    fn non_email_fields_accept_any_non_empty_text() {
        assert!(validate_field(Field::Name, "Ada Lovelace").is_ok());
        assert!(validate_field(Field::Phone, "+1 234 567 890").is_ok());
    }
}
