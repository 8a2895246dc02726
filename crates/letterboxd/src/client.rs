//! HTTP access to the site.
//!
//! Fetch logic talks to a `PageSource` rather than to reqwest directly so
//! that pagination and status handling can be exercised against canned
//! pages.

use crate::config::ScrapeConfig;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// A fetched page: HTTP status plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Something that can GET a URL and hand back the page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch `url`.
    ///
    /// Non-2xx statuses are returned as a `Page`, not as an error; only
    /// failures to obtain a response at all are errors.
    async fn get(&self, url: &str) -> Result<Page>;
}

/// `PageSource` backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Build the HTTP client from the scraper configuration
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn get(&self, url: &str) -> Result<Page> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(Page { status, body })
    }
}
