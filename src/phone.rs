use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// "+7" or "8" followed by exactly ten digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+7|8)[0-9]{10}$").expect("phone pattern is a valid regex")
});

/// A phone number that has passed format validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid phone number format: '{0}', expected +7XXXXXXXXXX or 8XXXXXXXXXX")]
pub struct InvalidPhone(pub String);

/// Validate a phone number against the national format
///
/// The input is returned unchanged on success. Nothing is trimmed or
/// normalized: spaces, dashes and parentheses are all rejected.
pub fn validate(phone: &str) -> Result<PhoneNumber, InvalidPhone> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(PhoneNumber(phone.to_string()))
    } else {
        Err(InvalidPhone(phone.to_string()))
    }
}
