//! Contact model representing one row of the contacts source.

use crate::error::ComposeResult;
use csv::{ReaderBuilder, StringRecord};

/// Header for the contact's first name.
pub const FIRST_NAME: &str = "first_name";

/// Header for the contact's property address.
pub const ADDRESS: &str = "associated_property_address_line_1";

/// Headers that may carry a phone number, in the order they are considered.
pub const PHONE_FIELDS: [&str; 3] = ["phone_1", "phone_2", "phone_3"];

/// Positions of the recognized columns within a header row.
///
/// Columns missing from the header are `None`, which makes the matching
/// contact field absent for every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactColumns {
    pub first_name: Option<usize>,
    pub address: Option<usize>,
    pub phones: [Option<usize>; 3],
}

impl ContactColumns {
    /// Index the recognized columns of a header row.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        Self {
            first_name: position(FIRST_NAME),
            address: position(ADDRESS),
            phones: PHONE_FIELDS.map(position),
        }
    }

    /// Whether the header row contains at least one phone column.
    pub fn has_phone_columns(&self) -> bool {
        self.phones.iter().any(Option::is_some)
    }
}

/// A contact parsed from one data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    /// First name, used for the `{name}` placeholder
    pub first_name: Option<String>,

    /// Property address, used for the `{address}` placeholder
    pub address: Option<String>,

    /// Raw phone values from `phone_1`, `phone_2` and `phone_3`
    pub phones: [Option<String>; 3],
}

impl Contact {
    /// Build a contact from a record using a pre-computed column index.
    ///
    /// Empty cells and cells past the end of a short row are absent.
    pub fn from_record(columns: &ContactColumns, record: &StringRecord) -> Self {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            first_name: cell(columns.first_name),
            address: cell(columns.address),
            phones: columns.phones.map(cell),
        }
    }

    /// First name trimmed, or empty when absent.
    pub fn name(&self) -> &str {
        self.first_name.as_deref().map(str::trim).unwrap_or("")
    }

    /// Address trimmed, or empty when absent.
    pub fn address(&self) -> &str {
        self.address.as_deref().map(str::trim).unwrap_or("")
    }

    /// Candidate phone values present on the row, trimmed, in field order.
    pub fn candidate_phones(&self) -> impl Iterator<Item = &str> {
        self.phones.iter().flatten().map(|p| p.trim())
    }
}

/// Parse the contacts source. The first row is the header.
pub fn parse_contacts(text: &str) -> ComposeResult<Vec<Contact>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = ContactColumns::from_headers(reader.headers()?);
    if !columns.has_phone_columns() {
        tracing::warn!("Contacts source has no phone_1, phone_2 or phone_3 column");
    }

    let mut contacts = Vec::new();
    for record in reader.records() {
        contacts.push(Contact::from_record(&columns, &record?));
    }
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_columns() {
        let text = "first_name,associated_property_address_line_1,phone_1,phone_2,phone_3\n\
                    Sam,1 Main St,555-123-4567,,(555) 987-6543\n";
        let contacts = parse_contacts(text).unwrap();
        assert_eq!(contacts.len(), 1);

        let contact = &contacts[0];
        assert_eq!(contact.name(), "Sam");
        assert_eq!(contact.address(), "1 Main St");
        assert_eq!(
            contact.candidate_phones().collect::<Vec<_>>(),
            vec!["555-123-4567", "(555) 987-6543"]
        );
    }

    #[test]
    fn test_parse_ignores_unknown_columns_and_order() {
        let text = "phone_2,email,first_name\n5551234567,sam@example.com,Sam\n";
        let contacts = parse_contacts(text).unwrap();
        assert_eq!(contacts[0].name(), "Sam");
        assert_eq!(contacts[0].address(), "");
        assert_eq!(contacts[0].phones, [None, Some("5551234567".to_string()), None]);
    }

    #[test]
    fn test_parse_short_rows_are_absent() {
        let text = "first_name,phone_1,phone_2\nAlex\n";
        let contacts = parse_contacts(text).unwrap();
        assert_eq!(contacts[0].name(), "Alex");
        assert_eq!(contacts[0].candidate_phones().count(), 0);
    }

    #[test]
    fn test_name_and_address_are_trimmed() {
        let contact = Contact {
            first_name: Some("  Sam ".to_string()),
            address: Some(" 1 Main St  ".to_string()),
            phones: [Some(" 5551234567 ".to_string()), None, None],
        };
        assert_eq!(contact.name(), "Sam");
        assert_eq!(contact.address(), "1 Main St");
        assert_eq!(contact.candidate_phones().next(), Some("5551234567"));
    }

    #[test]
    fn test_parse_header_only() {
        let contacts = parse_contacts("first_name,phone_1\n").unwrap();
        assert!(contacts.is_empty());
    }
}
