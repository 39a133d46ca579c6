use crate::error::ComposeResult;
use async_trait::async_trait;
use std::fmt;

/// The three inputs of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Contacts,
    Templates,
    DoNotContact,
}

impl InputKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Templates => "templates",
            Self::DoNotContact => "do-not-contact list",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Supplies the raw text of each input.
///
/// Enables different implementations (files, in-memory, uploads).
#[async_trait]
pub trait InputSource: Send + Sync {
    /// Read one input as a whole. `Ok(None)` means it was not supplied.
    async fn read(&self, kind: InputKind) -> ComposeResult<Option<String>>;
}

/// Receives finished artifacts.
#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Store one artifact under a suggested file name and return where it went.
    async fn write(&self, name: &str, contents: &str) -> ComposeResult<String>;
}
