//! # Letterboxd Crate
//!
//! Scrapes public watchlist and film pages.
//!
//! ## Components
//!
//! - **client**: `PageSource` trait and its reqwest implementation
//! - **parser**: watchlist/film page HTML → `Movie`
//! - **fetcher**: pagination, status handling, bounded-concurrency film fetches
//! - **config**: `ScrapeConfig` (base URL, delays, limits)
//! - **error**: `ScrapeError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use letterboxd::{ScrapeConfig, WatchlistFetcher};
//!
//! let fetcher = WatchlistFetcher::from_config(ScrapeConfig::default())?;
//! let watchlist = fetcher.fetch_watchlist("some_user").await?;
//!
//! let slugs: Vec<String> = watchlist.slugs().map(String::from).collect();
//! for (slug, film) in fetcher.fetch_films(&slugs).await {
//!     println!("{}: {:?}", slug, film?.and_then(|m| m.average_rating));
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod parser;

// Re-export commonly used types
pub use client::{HttpPageSource, Page, PageSource};
pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use fetcher::{is_valid_username, WatchlistFetcher};
pub use parser::{parse_film_page, WatchlistPage};
