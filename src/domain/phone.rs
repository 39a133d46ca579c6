//! PhoneNumber value object, normalization and validation.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of digits in a usable phone number.
pub const MIN_DIGITS: usize = 7;

/// Maximum number of digits in a usable phone number.
pub const MAX_DIGITS: usize = 15;

const LANDLINE_EXCLUDED: &str = "landline excluded";

/// Strip every non-digit character, keeping digit order.
///
/// ```
/// use outreach_composer::domain::normalize_phone;
///
/// assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
/// assert_eq!(normalize_phone(""), "");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check a raw phone value, returning the reason it is unusable.
///
/// The "landline excluded" marker is checked on the raw text, before
/// normalization would strip the words away.
pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }

    if raw.to_lowercase().contains(LANDLINE_EXCLUDED) {
        return Err(ValidationError::LandlineExcluded(raw.to_string()));
    }

    let digits = normalize_phone(raw);
    let len = digits.len();
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&len) {
        return Err(ValidationError::InvalidLength { digits, len });
    }

    Ok(())
}

/// Whether a raw phone value is usable.
pub fn is_valid_phone(raw: &str) -> bool {
    validate_phone(raw).is_ok()
}

/// A validated phone number held in normalized (digits only) form.
///
/// # Example
///
/// ```
/// use outreach_composer::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a raw phone value and keep its normalized form.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing why the value was rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_phone(raw)?;
        Ok(Self(normalize_phone(raw)))
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "15551234567");
        assert_eq!(normalize_phone("555.123.4567 ext"), "5551234567");
        assert_eq!(normalize_phone("no digits"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["(555) 123-4567", "abc", "", "1-800-FLOWERS", "  42  "] {
            let once = normalize_phone(raw);
            assert_eq!(normalize_phone(&once), once);
        }
    }

    #[test]
    fn test_normalize_removes_only_non_digits() {
        let raw = "a1b2-c3 (4)";
        let normalized = normalize_phone(raw);
        let expected: String = raw.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(normalized, expected);
        assert_eq!(normalized, "1234");
    }

    #[test]
    fn test_validator_length_boundaries() {
        assert!(!is_valid_phone("123456"));
        assert!(is_valid_phone("1234567"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn test_validator_counts_digits_not_characters() {
        assert!(is_valid_phone("123-4567"));
        assert!(!is_valid_phone("12-34-56"));
    }

    #[test]
    fn test_validator_rejects_empty() {
        assert_eq!(validate_phone(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_validator_rejects_landline_excluded_any_case() {
        assert!(!is_valid_phone("5551234567 Landline Excluded"));
        assert!(!is_valid_phone("LANDLINE EXCLUDED 5551234567"));
        assert!(matches!(
            validate_phone("(555) 123-4567 landline excluded"),
            Err(ValidationError::LandlineExcluded(_))
        ));
    }

    #[test]
    fn test_validator_reports_length() {
        assert_eq!(
            validate_phone("12-34"),
            Err(ValidationError::InvalidLength {
                digits: "1234".to_string(),
                len: 4
            })
        );
    }

    #[test]
    fn test_phone_number_parse() {
        let phone = PhoneNumber::parse("(555) 123-4567").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
        assert_eq!(format!("{}", phone), "5551234567");
        assert!(PhoneNumber::parse("555").is_err());
    }
}
