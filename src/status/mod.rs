//! Status surface for runs.
//!
//! A run reports human-readable progress with a severity, and toggles the
//! trigger that starts runs: disabled while a run is in progress, enabled
//! again once it finishes or fails.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl StatusLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives status updates from a run.
pub trait StatusReporter: Send + Sync {
    /// Show a status message.
    fn report(&self, level: StatusLevel, message: &str);

    /// Enable or disable the control that starts a run.
    fn set_trigger_enabled(&self, _enabled: bool) {}
}

/// Reporter that forwards status messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStatusReporter;

impl StatusReporter for TracingStatusReporter {
    fn report(&self, level: StatusLevel, message: &str) {
        match level {
            StatusLevel::Info | StatusLevel::Success => {
                tracing::info!(severity = %level, "{}", message)
            }
            StatusLevel::Error => tracing::error!(severity = %level, "{}", message),
        }
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        tracing::trace!(enabled, "Trigger state changed");
    }
}

/// One recorded status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub level: StatusLevel,
    pub message: String,
}

/// Reporter that keeps every update in memory.
///
/// Useful for embedding the run in a UI that polls for status, and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingStatusReporter {
    entries: Arc<Mutex<Vec<StatusEntry>>>,
    trigger_states: Arc<Mutex<Vec<bool>>>,
}

impl RecordingStatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All status messages so far, oldest first.
    pub fn entries(&self) -> Vec<StatusEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// The most recent status message.
    pub fn last(&self) -> Option<StatusEntry> {
        self.entries().pop()
    }

    /// Every trigger state change so far, oldest first.
    pub fn trigger_states(&self) -> Vec<bool> {
        self.trigger_states
            .lock()
            .map(|states| states.clone())
            .unwrap_or_default()
    }

    /// Whether the trigger is currently enabled. It starts enabled.
    pub fn trigger_enabled(&self) -> bool {
        self.trigger_states().last().copied().unwrap_or(true)
    }
}

impl StatusReporter for RecordingStatusReporter {
    fn report(&self, level: StatusLevel, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(StatusEntry {
                level,
                message: message.to_string(),
            });
        }
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        if let Ok(mut states) = self.trigger_states.lock() {
            states.push(enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags() {
        assert_eq!(StatusLevel::Info.to_string(), "info");
        assert_eq!(StatusLevel::Success.to_string(), "success");
        assert_eq!(StatusLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_recording_reporter() {
        let reporter = RecordingStatusReporter::new();
        assert!(reporter.trigger_enabled());

        reporter.set_trigger_enabled(false);
        reporter.report(StatusLevel::Info, "working");
        reporter.report(StatusLevel::Success, "done");
        reporter.set_trigger_enabled(true);

        assert_eq!(reporter.entries().len(), 2);
        assert_eq!(
            reporter.last(),
            Some(StatusEntry {
                level: StatusLevel::Success,
                message: "done".to_string()
            })
        );
        assert_eq!(reporter.trigger_states(), vec![false, true]);
        assert!(reporter.trigger_enabled());
    }

    #[test]
    fn test_clones_share_history() {
        let reporter = RecordingStatusReporter::new();
        let clone = reporter.clone();
        clone.report(StatusLevel::Error, "boom");
        assert_eq!(reporter.entries().len(), 1);
    }
}
