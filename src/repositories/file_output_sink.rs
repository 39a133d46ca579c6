use crate::error::ComposeResult;
use crate::repositories::traits::OutputSink;
use async_trait::async_trait;
use std::path::PathBuf;

/// Output sink writing artifacts into a directory.
#[derive(Debug, Clone)]
pub struct FileOutputSink {
    dir: PathBuf,
}

impl FileOutputSink {
    /// Create a sink for the given directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

#[async_trait]
impl OutputSink for FileOutputSink {
    async fn write(&self, name: &str, contents: &str) -> ComposeResult<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(name);
        tokio::fs::write(&path, contents).await?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote artifact");
        Ok(path.display().to_string())
    }
}
