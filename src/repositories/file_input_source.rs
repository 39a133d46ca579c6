use crate::config::Config;
use crate::error::{ComposeError, ComposeResult};
use crate::repositories::traits::{InputKind, InputSource};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Input source reading each input from a file on disk.
///
/// An input without a configured path is reported as not supplied. A
/// configured path that does not exist is a missing input rather than an
/// I/O failure.
#[derive(Debug, Clone, Default)]
pub struct FileInputSource {
    contacts: Option<PathBuf>,
    templates: Option<PathBuf>,
    do_not_contact: Option<PathBuf>,
}

impl FileInputSource {
    pub fn new(
        contacts: Option<PathBuf>,
        templates: Option<PathBuf>,
        do_not_contact: Option<PathBuf>,
    ) -> Self {
        Self {
            contacts,
            templates,
            do_not_contact,
        }
    }

    /// Create a source from the configured paths.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.contacts_path.clone(),
            config.templates_path.clone(),
            config.dnc_path.clone(),
        )
    }

    fn path(&self, kind: InputKind) -> Option<&PathBuf> {
        match kind {
            InputKind::Contacts => self.contacts.as_ref(),
            InputKind::Templates => self.templates.as_ref(),
            InputKind::DoNotContact => self.do_not_contact.as_ref(),
        }
    }
}

#[async_trait]
impl InputSource for FileInputSource {
    async fn read(&self, kind: InputKind) -> ComposeResult<Option<String>> {
        let Some(path) = self.path(kind) else {
            return Ok(None);
        };

        match tokio::fs::read_to_string(path).await {
            Ok(text) => {
                tracing::debug!(input = %kind, path = %path.display(), bytes = text.len(), "Read input");
                Ok(Some(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ComposeError::MissingInput(format!(
                "{} file not found: {}",
                kind,
                path.display()
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
