use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use super::models::{games_from_value, Game};
use super::source::GameSource;

/// Failure modes of a dataset fetch. All of them surface to the caller the
/// same way; the split only keeps transport trouble distinguishable from a
/// body we could not make sense of.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("dataset returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("dataset body is not a JSON array of records")]
    Malformed,
}

/// Client for the scraped-tips dataset endpoint.
pub struct DatasetClient {
    http: Client,
    url: String,
    fetch_delay: Duration,
}

impl DatasetClient {
    pub fn new(url: &str, fetch_delay: Duration, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(DatasetClient {
            http,
            url: url.to_string(),
            fetch_delay,
        })
    }

    /// Fetch the current dataset contents.
    ///
    /// The scraper run that feeds the dataset takes a while to finish, so
    /// every fetch first waits out the configured population delay. This is
    /// a single fixed wait, not a poll loop; a failed request is not retried.
    pub async fn fetch(&self) -> Result<Vec<Game>, DatasetError> {
        if !self.fetch_delay.is_zero() {
            info!(
                "Waiting {}s for the dataset to populate",
                self.fetch_delay.as_secs()
            );
            tokio::time::sleep(self.fetch_delay).await;
        }

        debug!("Fetching tips from {}", self.url);
        let resp = self.http.get(&self.url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DatasetError::Status {
                status,
                body: snippet(&body),
            });
        }

        let body = resp.text().await?;
        let raw: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| DatasetError::Malformed)?;
        games_from_value(&raw).ok_or(DatasetError::Malformed)
    }
}

#[async_trait]
impl GameSource for DatasetClient {
    fn name(&self) -> &str {
        "ApifyDataset"
    }

    async fn fetch_games(&self) -> Result<Vec<Game>> {
        Ok(self.fetch().await?)
    }
}

/// Trim an error body down to something log- and response-friendly.
fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    let trimmed = body.trim();
    if trimmed.len() <= MAX {
        trimmed.to_string()
    } else {
        let mut end = MAX;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &trimmed[..end])
    }
}
