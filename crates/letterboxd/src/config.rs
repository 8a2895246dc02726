//! Scraper configuration.

use std::time::Duration;

/// Default site root
pub const DEFAULT_BASE_URL: &str = "https://letterboxd.com";

/// Configuration for fetching watchlists and film pages
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Site root without trailing slash (default: https://letterboxd.com)
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout (default: 30s)
    pub timeout: Duration,
    /// Pause between consecutive watchlist page requests (default: 1s)
    pub request_delay: Duration,
    /// Upper bound on watchlist pages fetched per user (default: 500)
    pub max_pages: u32,
    /// Film pages fetched concurrently (default: 5)
    pub max_concurrent: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("common-watchlist/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            request_delay: Duration::from_secs(1),
            max_pages: 500,
            max_concurrent: 5,
        }
    }
}

impl ScrapeConfig {
    /// Set the site root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pause between page requests
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Set the page cap per watchlist (at least 1)
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Set the number of film pages fetched at once (at least 1)
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// URL of a watchlist page; page 1 has no page segment
    pub fn watchlist_url(&self, username: &str, page: u32) -> String {
        if page <= 1 {
            format!("{}/{}/watchlist/", self.base_url, username)
        } else {
            format!("{}/{}/watchlist/page/{}/", self.base_url, username, page)
        }
    }

    /// URL of a film's page
    pub fn film_url(&self, slug: &str) -> String {
        format!("{}/film/{}/", self.base_url, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = ScrapeConfig::default();

        assert_eq!(
            config.watchlist_url("alice", 1),
            "https://letterboxd.com/alice/watchlist/"
        );
        assert_eq!(
            config.watchlist_url("alice", 3),
            "https://letterboxd.com/alice/watchlist/page/3/"
        );
        assert_eq!(
            config.film_url("parasite-2019"),
            "https://letterboxd.com/film/parasite-2019/"
        );
    }

    #[test]
    fn test_builder_clamps() {
        let config = ScrapeConfig::default()
            .with_base_url("http://localhost:8080/")
            .with_max_pages(0)
            .with_max_concurrent(0);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_pages, 1);
        assert_eq!(config.max_concurrent, 1);
    }
}
