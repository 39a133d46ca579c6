//! Serialization of generated messages into downloadable artifacts.

pub mod naming;
pub mod writer;

pub use naming::{artifact_name, part_name, DEFAULT_FILENAME};
pub use writer::{render_artifacts, split_messages, to_csv, Artifact};
