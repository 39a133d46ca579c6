//! Template catalog parsed from a schemaless tabular source.

use crate::error::{ComposeError, ComposeResult};
use csv::ReaderBuilder;
use rand::seq::SliceRandom;
use rand::Rng;

/// Flat, ordered list of message templates.
///
/// Every non-empty cell of every row is one template. A catalog is never
/// empty: construction fails with [`ComposeError::NoTemplates`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<String>,
}

impl TemplateCatalog {
    /// Parse templates from raw tabular text.
    pub fn parse(text: &str) -> ComposeResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut templates = Vec::new();
        for record in reader.records() {
            let record = record?;
            templates.extend(
                record
                    .iter()
                    .filter(|cell| !cell.trim().is_empty())
                    .map(str::to_string),
            );
        }

        Self::from_templates(templates)
    }

    /// Build a catalog from already separated templates.
    pub fn from_templates(templates: Vec<String>) -> ComposeResult<Self> {
        if templates.is_empty() {
            return Err(ComposeError::NoTemplates);
        }
        Ok(Self { templates })
    }

    /// Pick one template uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction.
        self.templates
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }
}
