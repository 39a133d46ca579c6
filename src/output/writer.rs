//! CSV rendering of generated messages.

use super::naming::part_name;
use crate::error::{ComposeError, ComposeResult};
use crate::models::GeneratedMessage;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// A named, fully rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub contents: String,
}

/// Render messages as headerless `phone,message` rows.
pub fn to_csv(messages: &[GeneratedMessage]) -> ComposeResult<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for message in messages {
        writer.serialize(message)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ComposeError::Other(e.to_string()))
}

/// Split messages into consecutive chunks of at most `per_file` rows.
pub fn split_messages(messages: &[GeneratedMessage], per_file: usize) -> Vec<&[GeneratedMessage]> {
    messages.chunks(per_file.max(1)).collect()
}

/// Render the artifacts for one run.
///
/// Without a split size, or with no messages at all, a single artifact
/// named `name` is produced. Otherwise one `-part-N` artifact is produced
/// per chunk.
pub fn render_artifacts(
    messages: &[GeneratedMessage],
    name: &str,
    per_file: Option<usize>,
) -> ComposeResult<Vec<Artifact>> {
    match per_file {
        Some(per_file) if !messages.is_empty() => split_messages(messages, per_file)
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| -> ComposeResult<Artifact> {
                Ok(Artifact {
                    name: part_name(name, i + 1),
                    contents: to_csv(chunk)?,
                })
            })
            .collect(),
        _ => Ok(vec![Artifact {
            name: name.to_string(),
            contents: to_csv(messages)?,
        }]),
    }
}
