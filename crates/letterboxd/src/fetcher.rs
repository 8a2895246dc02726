//! Watchlist and film page retrieval.
//!
//! ## Pagination
//! 1. Request `/{user}/watchlist/`, then `/{user}/watchlist/page/{n}/`
//! 2. Stop at the first page without films, at a 404 on any page after
//!    the first, or at `max_pages`
//! 3. A 404 on the first page means the profile does not exist
//!
//! Pages for one user are requested one after another with
//! `request_delay` in between. Nothing is retried.

use crate::client::{HttpPageSource, PageSource};
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::parser::{parse_film_page, WatchlistPage};
use futures::stream::{self, StreamExt};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use watchlist_core::{FilmSlug, Movie, Watchlist};

/// Fetches watchlists and film details through a `PageSource`
pub struct WatchlistFetcher<S: PageSource> {
    source: S,
    config: ScrapeConfig,
}

impl WatchlistFetcher<HttpPageSource> {
    /// Create a fetcher that talks to the real site over HTTP
    pub fn from_config(config: ScrapeConfig) -> Result<Self> {
        let source = HttpPageSource::new(&config)?;
        Ok(Self::new(source, config))
    }
}

impl<S: PageSource> WatchlistFetcher<S> {
    pub fn new(source: S, config: ScrapeConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch every page of `username`'s watchlist.
    ///
    /// # Errors
    /// * `UserNotFound` - invalid username, or 404 on the first page
    /// * `HttpStatus` / `Network` - any other failed request
    /// * `Parse` - a page without watchlist markup
    #[instrument(skip(self))]
    pub async fn fetch_watchlist(&self, username: &str) -> Result<Watchlist> {
        if !is_valid_username(username) {
            return Err(ScrapeError::UserNotFound {
                username: username.to_string(),
            });
        }

        let start = Instant::now();
        let mut watchlist = Watchlist::new(username);
        let mut expected_count = None;
        let mut pages_fetched = 0;

        for page_no in 1..=self.config.max_pages {
            if page_no > 1 && !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }

            let url = self.config.watchlist_url(username, page_no);
            let page = self.source.get(&url).await?;

            if page.is_not_found() {
                if page_no == 1 {
                    return Err(ScrapeError::UserNotFound {
                        username: username.to_string(),
                    });
                }
                debug!("Page {} returned 404, end of watchlist", page_no);
                break;
            }
            if !page.is_success() {
                return Err(ScrapeError::HttpStatus {
                    url,
                    status: page.status,
                });
            }

            let (films, count) = read_watchlist_page(&url, &page.body, page_no == 1)?;
            pages_fetched = page_no;
            if page_no == 1 {
                expected_count = count;
            }

            if films.is_empty() {
                debug!("Page {} has no films, end of watchlist", page_no);
                break;
            }

            debug!("Page {}: {} films", page_no, films.len());
            watchlist.extend(films);

            if page_no == self.config.max_pages {
                warn!(
                    "Stopped after {} pages for {}; watchlist may be incomplete",
                    page_no, username
                );
            }
        }

        if let Some(expected) = expected_count {
            if expected as usize != watchlist.len() {
                warn!(
                    "{}'s watchlist reports {} films but {} were fetched",
                    username,
                    expected,
                    watchlist.len()
                );
            }
        }

        info!(
            "Fetched {} films for {} from {} pages in {:.2?}",
            watchlist.len(),
            username,
            pages_fetched,
            start.elapsed()
        );
        Ok(watchlist)
    }

    /// Fetch one film's page.
    ///
    /// Returns `Ok(None)` when the film page does not exist.
    #[instrument(skip(self))]
    pub async fn fetch_film(&self, slug: &str) -> Result<Option<Movie>> {
        let url = self.config.film_url(slug);
        let page = self.source.get(&url).await?;

        if page.is_not_found() {
            warn!("Film page for {} not found", slug);
            return Ok(None);
        }
        if !page.is_success() {
            return Err(ScrapeError::HttpStatus {
                url,
                status: page.status,
            });
        }

        parse_film_page(slug, &page.body).map(Some)
    }

    /// Fetch several film pages, at most `max_concurrent` at a time.
    ///
    /// Results come back in the order of `slugs`, one per slug.
    pub async fn fetch_films(&self, slugs: &[FilmSlug]) -> Vec<(FilmSlug, Result<Option<Movie>>)> {
        let start = Instant::now();

        let results: Vec<(FilmSlug, Result<Option<Movie>>)> = stream::iter(slugs.iter().cloned())
            .map(|slug| async move {
                let result = self.fetch_film(&slug).await;
                (slug, result)
            })
            .buffered(self.config.max_concurrent)
            .collect()
            .await;

        info!(
            "Fetched {} film pages in {:.2?} (max {} concurrent)",
            results.len(),
            start.elapsed(),
            self.config.max_concurrent
        );
        results
    }
}

/// Parse one watchlist page into its films and (optionally) the total count.
///
/// Kept synchronous so the parsed document never lives across an await.
fn read_watchlist_page(url: &str, body: &str, with_count: bool) -> Result<(Vec<Movie>, Option<u32>)> {
    let page = WatchlistPage::parse(url, body)?;
    let count = if with_count { page.watchlist_count()? } else { None };
    Ok((page.films().collect(), count))
}

/// Profile names are ASCII letters, digits and underscores
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty() && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
