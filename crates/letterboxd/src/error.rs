//! Error types for scraping.

use thiserror::Error;

/// Errors that can occur while fetching or parsing site pages
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The request never produced a response (DNS, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status we cannot use
    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// The profile does not exist (404 on its first watchlist page)
    #[error("User not found: {username}")]
    UserNotFound { username: String },

    /// The page did not have the markup we expect; the site layout changed
    #[error("Failed to parse {page}: {reason}")]
    Parse { page: String, reason: String },
}

impl ScrapeError {
    pub(crate) fn parse(page: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            page: page.into(),
            reason: reason.into(),
        }
    }

    /// True for transport failures and unusable HTTP statuses
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }

    /// True when only the affected user should be skipped
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ScrapeError>;
