//! Domain validation errors.

use std::fmt;

/// Reasons a raw phone value is not usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw value is empty.
    Empty,

    /// The raw value is marked "landline excluded".
    LandlineExcluded(String),

    /// The normalized digit count is outside the accepted range.
    InvalidLength { digits: String, len: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Phone number cannot be empty"),
            Self::LandlineExcluded(raw) => write!(f, "Phone number is excluded: {}", raw),
            Self::InvalidLength { digits, len } => {
                write!(f, "Phone number {} has {} digits", digits, len)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
