//! Generated outbound message.

use crate::domain::PhoneNumber;
use serde::Serialize;

/// One outbound message for one phone of one contact.
///
/// Serializes as a `(phone, message)` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedMessage {
    /// Normalized destination phone
    pub phone: PhoneNumber,

    /// Fully substituted and expanded message text
    pub message: String,
}

impl GeneratedMessage {
    pub fn new(phone: PhoneNumber, message: impl Into<String>) -> Self {
        Self {
            phone,
            message: message.into(),
        }
    }
}
