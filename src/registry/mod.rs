//! Opt-out registry.

pub mod do_not_contact;

pub use do_not_contact::DoNotContactSet;
