//! Page fetching.
//!
//! [`PageSource`] is the seam the poller fetches through; production
//! uses [`HttpFetcher`], tests substitute canned HTML.

use async_trait::async_trait;

use crate::error::FetchError;

/// Source of page bodies for the poller.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body of `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP-backed page source.
///
/// One GET per call with the client's default transport settings: no
/// retry, no custom timeout, default redirect handling. Failures are
/// returned to the poller, which logs and skips the site for the tick.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        Ok(response.text().await?)
    }
}
