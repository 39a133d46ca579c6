use async_trait::async_trait;
use outreach_composer::error::{ComposeError, ComposeResult};
use outreach_composer::repositories::{InputKind, InputSource};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock input source serving in-memory text.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockInputSource {
    inputs: Arc<Mutex<HashMap<InputKind, String>>>,
    failing: Arc<Mutex<Option<InputKind>>>,
    call_counts: Arc<Mutex<HashMap<InputKind, usize>>>,
}

#[allow(dead_code)]
impl MockInputSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, kind: InputKind, text: &str) -> Self {
        self.inputs.lock().unwrap().insert(kind, text.to_string());
        self
    }

    /// Make reads of `kind` fail with an I/O error.
    pub fn failing_on(self, kind: InputKind) -> Self {
        *self.failing.lock().unwrap() = Some(kind);
        self
    }

    pub fn get_call_count(&self, kind: InputKind) -> usize {
        *self.call_counts.lock().unwrap().get(&kind).unwrap_or(&0)
    }

    fn track_call(&self, kind: InputKind) {
        *self.call_counts.lock().unwrap().entry(kind).or_insert(0) += 1;
    }
}

#[async_trait]
impl InputSource for MockInputSource {
    async fn read(&self, kind: InputKind) -> ComposeResult<Option<String>> {
        self.track_call(kind);

        if *self.failing.lock().unwrap() == Some(kind) {
            return Err(ComposeError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("cannot read {}", kind),
            )));
        }

        Ok(self.inputs.lock().unwrap().get(&kind).cloned())
    }
}
