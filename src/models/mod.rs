//! Data models for contacts and generated messages.

pub mod contact;
pub mod message;

pub use contact::{parse_contacts, Contact, ContactColumns};
pub use message::GeneratedMessage;
