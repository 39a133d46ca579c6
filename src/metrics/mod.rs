//! Per-run counters for message generation.
//!
//! A fresh [`RunMetrics`] is created for each run; nothing carries over
//! between runs.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Counters collected while composing messages.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    /// Contacts read from the contacts source
    contacts_processed: Arc<AtomicU64>,

    /// Candidate phones that failed validation
    phones_rejected: Arc<AtomicU64>,

    /// Valid phones skipped because they are on the do-not-contact list
    phones_blocked: Arc<AtomicU64>,

    /// Messages emitted
    messages_created: Arc<AtomicU64>,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_contact(&self) {
        self.contacts_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.phones_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_blocked(&self) {
        self.phones_blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_message(&self) {
        self.messages_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn contacts_processed(&self) -> u64 {
        self.contacts_processed.load(Ordering::Relaxed)
    }

    pub fn phones_rejected(&self) -> u64 {
        self.phones_rejected.load(Ordering::Relaxed)
    }

    pub fn phones_blocked(&self) -> u64 {
        self.phones_blocked.load(Ordering::Relaxed)
    }

    pub fn messages_created(&self) -> u64 {
        self.messages_created.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_processed: self.contacts_processed(),
            phones_rejected: self.phones_rejected(),
            phones_blocked: self.phones_blocked(),
            messages_created: self.messages_created(),
        }
    }
}

/// A snapshot of run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSummary {
    pub contacts_processed: u64,
    pub phones_rejected: u64,
    pub phones_blocked: u64,
    pub messages_created: u64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} messages ({} blocked by do-not-contact list)",
            self.messages_created, self.phones_blocked
        )
    }
}

/// Helper for timing a run.
#[derive(Debug)]
pub struct RunTimer {
    start: Instant,
}

impl RunTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = RunMetrics::new();
        assert_eq!(metrics.summary(), MetricsSummary::default());
    }

    #[test]
    fn test_record_counters() {
        let metrics = RunMetrics::new();
        metrics.record_contact();
        metrics.record_contact();
        metrics.record_rejected();
        metrics.record_blocked();
        metrics.record_message();

        let summary = metrics.summary();
        assert_eq!(summary.contacts_processed, 2);
        assert_eq!(summary.phones_rejected, 1);
        assert_eq!(summary.phones_blocked, 1);
        assert_eq!(summary.messages_created, 1);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = RunMetrics::new();
        let clone = metrics.clone();
        clone.record_message();
        assert_eq!(metrics.messages_created(), 1);
    }

    #[test]
    fn test_summary_display() {
        let summary = MetricsSummary {
            contacts_processed: 5,
            phones_rejected: 2,
            phones_blocked: 3,
            messages_created: 12,
        };
        assert_eq!(
            summary.to_string(),
            "Generated 12 messages (3 blocked by do-not-contact list)"
        );
    }

    #[test]
    fn test_run_timer() {
        let timer = RunTimer::start();
        thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() >= Duration::from_millis(5));
    }
}
