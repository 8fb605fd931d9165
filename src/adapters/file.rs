use crate::domain::ports::TextSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads grid text from the local filesystem.
///
/// Locations are resolved against `base_path`; absolute locations are used as is.
#[derive(Debug, Clone, Default)]
pub struct FileTextSource {
    base_path: PathBuf,
}

impl FileTextSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

#[async_trait]
impl TextSource for FileTextSource {
    async fn fetch_text(&self, location: &str) -> Result<String> {
        let full_path = self.base_path.join(Path::new(location));
        tracing::debug!("Reading matrix from: {}", full_path.display());
        let text = tokio::fs::read_to_string(&full_path).await?;
        Ok(text)
    }
}
