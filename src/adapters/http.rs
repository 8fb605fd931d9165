use crate::domain::ports::{ConfigProvider, TextSource};
use crate::utils::error::{MatrixError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("spiral-matrix/", env!("CARGO_PKG_VERSION"));

/// Fetches grid text over HTTP(S) with one GET request per call.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: Client,
}

impl HttpTextSource {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.request_timeout(), config.user_agent())
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    async fn fetch_text(&self, location: &str) -> Result<String> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| classify_transport_error(location, e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_client_error() {
            return Err(MatrixError::ClientError {
                status: status.as_u16(),
                url: location.to_string(),
            });
        }
        if status.is_server_error() {
            return Err(MatrixError::ServerError {
                status: status.as_u16(),
                url: location.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| classify_transport_error(location, e))
    }
}

fn classify_transport_error(url: &str, e: reqwest::Error) -> MatrixError {
    if e.is_timeout() {
        MatrixError::TimeoutError {
            url: url.to_string(),
            message: e.to_string(),
        }
    } else if e.is_connect() {
        MatrixError::ConnectionError {
            url: url.to_string(),
            message: e.to_string(),
        }
    } else {
        MatrixError::ApiError(e)
    }
}
