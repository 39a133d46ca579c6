//! Run service layer.
//!
//! One run reads the inputs, composes messages, renders the CSV artifacts
//! and hands them to the output sink, reporting progress on the status
//! surface throughout.

use crate::config::Config;
use crate::error::{ComposeError, ComposeResult};
use crate::metrics::{MetricsSummary, RunMetrics, RunTimer};
use crate::output::{artifact_name, render_artifacts, Artifact};
use crate::repositories::{InputKind, InputSource, OutputSink};
use crate::services::compose_service::generate_messages;
use crate::status::{StatusLevel, StatusReporter};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Output options for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub output_filename: String,
    pub dated_output: bool,
    pub messages_per_file: Option<usize>,
    pub shuffle_output: bool,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_filename: config.output_filename.clone(),
            dated_output: config.dated_output,
            messages_per_file: config.messages_per_file,
            shuffle_output: config.shuffle_output,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub metrics: MetricsSummary,
    /// Where the sink stored each artifact, in order
    pub artifacts: Vec<String>,
    pub elapsed: Duration,
}

/// Executes runs against an input source and an output sink.
pub struct RunService {
    input: Arc<dyn InputSource>,
    sink: Arc<dyn OutputSink>,
    status: Arc<dyn StatusReporter>,
    options: RunOptions,
    in_progress: AtomicBool,
}

impl RunService {
    pub fn new(
        input: Arc<dyn InputSource>,
        sink: Arc<dyn OutputSink>,
        status: Arc<dyn StatusReporter>,
        options: RunOptions,
    ) -> Self {
        Self {
            input,
            sink,
            status,
            options,
            in_progress: AtomicBool::new(false),
        }
    }

    /// Whether a run is currently executing.
    pub fn is_running(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Execute one run.
    ///
    /// The trigger is disabled for the duration of the run and enabled
    /// again whether it succeeds or fails. Every failure is reported on the
    /// status surface before being returned.
    pub async fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> ComposeResult<RunSummary> {
        let _trigger = match TriggerGuard::acquire(&self.in_progress, self.status.as_ref()) {
            Ok(guard) => guard,
            Err(e) => {
                warn!("Run requested while another run is in progress");
                return Err(e);
            }
        };

        let result = self.execute(rng).await;
        match &result {
            Ok(summary) => self
                .status
                .report(StatusLevel::Success, &summary.metrics.to_string()),
            Err(e) => {
                error!(error = %e, user_error = e.is_user_error(), "Run failed");
                self.status.report(StatusLevel::Error, &failure_message(e));
            }
        }
        result
    }

    async fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> ComposeResult<RunSummary> {
        let timer = RunTimer::start();
        self.status.report(StatusLevel::Info, "Generating messages...");

        let (contacts, templates, do_not_contact) = futures::try_join!(
            self.input.read(InputKind::Contacts),
            self.input.read(InputKind::Templates),
            self.input.read(InputKind::DoNotContact),
        )?;

        let contacts = contacts.ok_or_else(|| missing(InputKind::Contacts))?;
        let templates = templates.ok_or_else(|| missing(InputKind::Templates))?;

        let metrics = RunMetrics::new();
        let artifacts = self.render(
            &contacts,
            &templates,
            do_not_contact.as_deref(),
            rng,
            &metrics,
        )?;

        let mut locations = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            locations.push(self.sink.write(&artifact.name, &artifact.contents).await?);
        }

        let summary = RunSummary {
            metrics: metrics.summary(),
            artifacts: locations,
            elapsed: timer.elapsed(),
        };
        info!(
            contacts = summary.metrics.contacts_processed,
            rejected = summary.metrics.phones_rejected,
            blocked = summary.metrics.phones_blocked,
            created = summary.metrics.messages_created,
            artifacts = summary.artifacts.len(),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Run completed"
        );
        Ok(summary)
    }

    fn render<R: Rng + ?Sized>(
        &self,
        contacts: &str,
        templates: &str,
        do_not_contact: Option<&str>,
        rng: &mut R,
        metrics: &RunMetrics,
    ) -> ComposeResult<Vec<Artifact>> {
        let mut messages = generate_messages(contacts, templates, do_not_contact, rng, metrics)?;

        if self.options.shuffle_output {
            messages.shuffle(rng);
        }

        let date = self
            .options
            .dated_output
            .then(|| chrono::Local::now().date_naive());
        let name = artifact_name(&self.options.output_filename, date);

        render_artifacts(&messages, &name, self.options.messages_per_file)
    }
}

fn missing(kind: InputKind) -> ComposeError {
    ComposeError::MissingInput(format!("no {} file was provided", kind))
}

fn failure_message(err: &ComposeError) -> String {
    if err.is_user_error() {
        err.to_string()
    } else {
        format!("An error occurred: {}", err)
    }
}

/// Marks a run in progress and disables the trigger until dropped.
struct TriggerGuard<'a> {
    flag: &'a AtomicBool,
    status: &'a dyn StatusReporter,
}

impl<'a> TriggerGuard<'a> {
    fn acquire(flag: &'a AtomicBool, status: &'a dyn StatusReporter) -> ComposeResult<Self> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ComposeError::RunInProgress);
        }
        status.set_trigger_enabled(false);
        Ok(Self { flag, status })
    }
}

impl Drop for TriggerGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.status.set_trigger_enabled(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::RecordingStatusReporter;

    #[test]
    fn test_trigger_guard_blocks_second_run() {
        let flag = AtomicBool::new(false);
        let status = RecordingStatusReporter::new();

        let guard = TriggerGuard::acquire(&flag, &status).unwrap();
        assert!(matches!(
            TriggerGuard::acquire(&flag, &status),
            Err(ComposeError::RunInProgress)
        ));
        assert!(!status.trigger_enabled());

        drop(guard);
        assert!(status.trigger_enabled());
        assert!(TriggerGuard::acquire(&flag, &status).is_ok());
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(
            failure_message(&ComposeError::NoTemplates),
            "No templates found in the template source"
        );
        assert_eq!(
            failure_message(&ComposeError::Other("disk full".to_string())),
            "An error occurred: Generation failed: disk full"
        );
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            messages_per_file: Some(100),
            shuffle_output: true,
            ..Config::default()
        };
        let options = RunOptions::from_config(&config);
        assert_eq!(options.output_filename, "messages.csv");
        assert_eq!(options.messages_per_file, Some(100));
        assert!(options.shuffle_output);
    }
}
