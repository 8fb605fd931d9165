use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can hand back the raw grid text for a location.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch_text(&self, location: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}
