//! Message composition.
//!
//! Turns parsed contacts into one message per usable phone, using a
//! template catalog, a do-not-contact set and a caller-supplied random
//! source.

use crate::domain::PhoneNumber;
use crate::error::ComposeResult;
use crate::metrics::RunMetrics;
use crate::models::{parse_contacts, Contact, GeneratedMessage};
use crate::registry::DoNotContactSet;
use crate::templates::{expand_variants, substitute_placeholders, TemplateCatalog};
use rand::Rng;
use tracing::debug;

/// Builds outbound messages for contacts.
#[derive(Debug, Clone)]
pub struct MessageComposer {
    catalog: TemplateCatalog,
    do_not_contact: DoNotContactSet,
}

impl MessageComposer {
    /// Create a composer from a parsed catalog and do-not-contact set.
    pub fn new(catalog: TemplateCatalog, do_not_contact: DoNotContactSet) -> Self {
        Self {
            catalog,
            do_not_contact,
        }
    }

    /// Create a composer from raw template and opt-out text.
    ///
    /// # Errors
    ///
    /// Fails with `ComposeError::NoTemplates` when the template source has
    /// no non-empty cells.
    pub fn from_sources(templates: &str, do_not_contact: Option<&str>) -> ComposeResult<Self> {
        let catalog = TemplateCatalog::parse(templates)?;
        let do_not_contact = DoNotContactSet::from_optional(do_not_contact)?;
        Ok(Self::new(catalog, do_not_contact))
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn do_not_contact(&self) -> &DoNotContactSet {
        &self.do_not_contact
    }

    /// Compose messages for every contact, in contact then phone order.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        contacts: &[Contact],
        rng: &mut R,
        metrics: &RunMetrics,
    ) -> Vec<GeneratedMessage> {
        let mut messages = Vec::with_capacity(contacts.len());
        for contact in contacts {
            metrics.record_contact();
            messages.extend(self.compose_contact(contact, rng, metrics));
        }
        messages
    }

    /// Compose one message per valid, non-blocked phone of a contact.
    ///
    /// Each phone gets its own template pick and variant expansion.
    pub fn compose_contact<R: Rng + ?Sized>(
        &self,
        contact: &Contact,
        rng: &mut R,
        metrics: &RunMetrics,
    ) -> Vec<GeneratedMessage> {
        let phones: Vec<PhoneNumber> = contact
            .candidate_phones()
            .filter_map(|raw| match PhoneNumber::parse(raw) {
                Ok(phone) => Some(phone),
                Err(reason) => {
                    debug!(%reason, "Skipping phone");
                    metrics.record_rejected();
                    None
                }
            })
            .collect();

        let mut messages = Vec::with_capacity(phones.len());
        for phone in phones {
            if self.do_not_contact.contains(phone.as_str()) {
                debug!(phone = %phone, "Phone is on the do-not-contact list");
                metrics.record_blocked();
                continue;
            }

            let template = self.catalog.choose(rng);
            let filled = substitute_placeholders(template, contact.name(), contact.address());
            let message = expand_variants(&filled, rng);

            metrics.record_message();
            messages.push(GeneratedMessage::new(phone, message));
        }
        messages
    }
}

/// Run the whole pipeline over raw text inputs.
///
/// Templates are parsed first so an empty template source fails before
/// anything else is read.
pub fn generate_messages<R: Rng + ?Sized>(
    contacts: &str,
    templates: &str,
    do_not_contact: Option<&str>,
    rng: &mut R,
    metrics: &RunMetrics,
) -> ComposeResult<Vec<GeneratedMessage>> {
    let composer = MessageComposer::from_sources(templates, do_not_contact)?;
    let contacts = parse_contacts(contacts)?;
    Ok(composer.compose(&contacts, rng, metrics))
}
