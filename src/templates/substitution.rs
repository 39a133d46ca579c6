//! Placeholder substitution for message templates.

/// Placeholder replaced with the contact's first name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Placeholder replaced with the contact's property address.
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

/// Replace every literal `{name}` and `{address}` in a template.
///
/// Other brace-delimited text is left untouched.
pub fn substitute_placeholders(template: &str, name: &str, address: &str) -> String {
    template
        .replace(NAME_PLACEHOLDER, name)
        .replace(ADDRESS_PLACEHOLDER, address)
}
