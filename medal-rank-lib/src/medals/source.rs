use super::{RawMedalCount, RetrievalError};
use crate::Result;
use anyhow::Context;
use core::time::Duration;

const LOG_TARGET: &str = "    source";

/// Default timeout for a single request to a medal source.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where medal counts come from.
pub trait MedalSource: Send + Sync + 'static {
    /// Fetch the raw records published at `locator`.
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<Vec<RawMedalCount>, RetrievalError>> + Send;
}

/// Fetches medal counts as JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("medal-rank/", env!("CARGO_PKG_VERSION")))
            .timeout(request_timeout)
            .build()
            .context("unable to create HTTP client")?;

        Ok(Self { client })
    }
}

impl MedalSource for HttpSource {
    async fn fetch(&self, locator: &str) -> Result<Vec<RawMedalCount>, RetrievalError> {
        log::info!(target: LOG_TARGET, "Querying '{locator}' for medal counts");

        let transport = |e: reqwest::Error| RetrievalError::Transport {
            locator: locator.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(locator).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            log::debug!(target: LOG_TARGET, "'{locator}' responded with {status}");
            return Err(RetrievalError::Status {
                locator: locator.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let records: Vec<RawMedalCount> = serde_json::from_slice(&body).map_err(|e| RetrievalError::Payload {
            locator: locator.to_string(),
            reason: e.to_string(),
        })?;

        log::debug!(target: LOG_TARGET, "Fetched {} medal records from '{locator}'", records.len());
        Ok(records)
    }
}
