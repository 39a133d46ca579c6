//! Domain value objects and types.
//!
//! Phone numbers are normalized to digits and validated here, once, so the
//! rest of the pipeline only ever compares and writes the normalized form.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::{is_valid_phone, normalize_phone, validate_phone, PhoneNumber};
