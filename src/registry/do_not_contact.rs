//! Do-not-contact set built from an opt-out list.

use crate::domain::normalize_phone;
use crate::error::ComposeResult;
use csv::ReaderBuilder;
use std::collections::HashSet;

/// Cell values treated as a header row rather than a phone number.
const HEADER_TOKENS: [&str; 3] = ["phone", "telephone", "number"];

/// Normalized phone numbers that must never receive a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoNotContactSet {
    phones: HashSet<String>,
}

impl DoNotContactSet {
    /// An empty set, used when no opt-out list is supplied.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the set from the first column of every row.
    ///
    /// Header-like cells (`phone`, `telephone`, `number`, any case) and
    /// values with no digits are skipped, so a header row needs no special
    /// handling.
    pub fn parse(text: &str) -> ComposeResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut phones = HashSet::new();
        for record in reader.records() {
            let record = record?;
            let Some(first) = record.get(0) else {
                continue;
            };

            if is_header_token(first) {
                continue;
            }

            let phone = normalize_phone(first);
            if !phone.is_empty() {
                phones.insert(phone);
            }
        }

        tracing::debug!(count = phones.len(), "Loaded do-not-contact list");
        Ok(Self { phones })
    }

    /// Build the set from an optional source; absent means no filtering.
    pub fn from_optional(text: Option<&str>) -> ComposeResult<Self> {
        match text {
            Some(text) => Self::parse(text),
            None => Ok(Self::empty()),
        }
    }

    /// Whether a normalized phone is on the list.
    pub fn contains(&self, normalized: &str) -> bool {
        self.phones.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}

impl FromIterator<String> for DoNotContactSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            phones: iter
                .into_iter()
                .map(|p| normalize_phone(&p))
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }
}

fn is_header_token(cell: &str) -> bool {
    let cell = cell.trim();
    HEADER_TOKENS
        .iter()
        .any(|token| cell.eq_ignore_ascii_case(token))
}
