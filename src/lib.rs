//! Outreach Composer - generate per-phone outreach messages.
//!
//! Takes a contacts list, a pool of message templates and an optional
//! do-not-contact list, and produces one `(phone, message)` row for every
//! valid, non-excluded phone of every contact. Template choice and
//! `[a/b/c]` alternative-text groups are resolved with a caller-supplied
//! random source, so runs are reproducible under a fixed seed.
//!
//! # Architecture
//!
//! - **domain**: phone normalization, validation and the `PhoneNumber` value object
//! - **models**: contacts and generated messages
//! - **templates**: template catalog, placeholder substitution, variant expansion
//! - **registry**: the do-not-contact set
//! - **services**: the message composer and the run service
//! - **repositories**: input source and output sink seams with file implementations
//! - **output**: CSV rendering, artifact naming and splitting
//! - **status**: status surface for runs
//! - **metrics**: per-run counters
//! - **config**: configuration from environment variables
//! - **error**: error types

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod output;
pub mod registry;
pub mod repositories;
pub mod services;
pub mod status;
pub mod templates;

pub use config::Config;
pub use domain::{is_valid_phone, normalize_phone, PhoneNumber, ValidationError};
pub use error::{ComposeError, ComposeResult, ConfigError, ConfigResult};
pub use metrics::{MetricsSummary, RunMetrics};
pub use models::{Contact, GeneratedMessage};
pub use registry::DoNotContactSet;
pub use repositories::{FileInputSource, FileOutputSink, InputKind, InputSource, OutputSink};
pub use services::{generate_messages, MessageComposer, RunOptions, RunService, RunSummary};
pub use status::{StatusLevel, StatusReporter, TracingStatusReporter};
pub use templates::{expand_variants, TemplateCatalog};
