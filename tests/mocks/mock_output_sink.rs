use async_trait::async_trait;
use outreach_composer::error::ComposeResult;
use outreach_composer::repositories::OutputSink;
use std::sync::{Arc, Mutex};

/// Mock output sink keeping artifacts in memory, in write order.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockOutputSink {
    artifacts: Arc<Mutex<Vec<(String, String)>>>,
}

#[allow(dead_code)]
impl MockOutputSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifacts(&self) -> Vec<(String, String)> {
        self.artifacts.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.artifacts().into_iter().map(|(name, _)| name).collect()
    }

    /// Contents of the only artifact written.
    pub fn single(&self) -> String {
        let artifacts = self.artifacts();
        assert_eq!(artifacts.len(), 1, "expected exactly one artifact");
        artifacts[0].1.clone()
    }
}

#[async_trait]
impl OutputSink for MockOutputSink {
    async fn write(&self, name: &str, contents: &str) -> ComposeResult<String> {
        self.artifacts
            .lock()
            .unwrap()
            .push((name.to_string(), contents.to_string()));
        Ok(format!("memory://{}", name))
    }
}
