//! Message templates.
//!
//! - **catalog**: parse the template source into a flat list and pick from it
//! - **substitution**: fill `{name}` and `{address}`
//! - **variants**: resolve `[a/b/c]` alternative-text groups

pub mod catalog;
pub mod substitution;
pub mod variants;

pub use catalog::TemplateCatalog;
pub use substitution::substitute_placeholders;
pub use variants::expand_variants;
