//! # Watchlist Orchestrator
//!
//! This module coordinates a run:
//! 1. Deduplicate the requested usernames
//! 2. Fetch every watchlist concurrently (`join_all`)
//! 3. Skip users that do not exist, fail on any other error
//! 4. Intersect the watchlists
//! 5. Fetch film pages for the common films and merge the details
//! 6. Apply the filter criteria

use std::time::Instant;

use anyhow::{bail, Context, Result};
use futures::future::join_all;
use tracing::{info, warn};

use letterboxd::{HttpPageSource, PageSource, ScrapeConfig, WatchlistFetcher};
use pipeline::FilterCriteria;
use watchlist_core::{intersect_watchlists, CommonFilm, CommonWatchlist, FilmSlug, Watchlist};

/// Common watchlist plus the users that had to be left out
#[derive(Debug, Clone)]
pub struct CommonOutcome {
    pub common: CommonWatchlist,
    /// Users whose profile does not exist
    pub skipped_users: Vec<String>,
}

/// Everything a full run produces
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Enriched common watchlist, before filtering
    pub common: CommonWatchlist,
    /// Films that passed the criteria, in watchlist order
    pub films: Vec<CommonFilm>,
    pub skipped_users: Vec<String>,
    /// Films whose page no longer exists; they keep their watchlist data
    pub missing_details: Vec<FilmSlug>,
}

/// Coordinates fetching, intersection, enrichment and filtering
pub struct WatchlistOrchestrator<S: PageSource> {
    fetcher: WatchlistFetcher<S>,
}

impl WatchlistOrchestrator<HttpPageSource> {
    pub fn from_config(config: ScrapeConfig) -> Result<Self> {
        let fetcher =
            WatchlistFetcher::from_config(config).context("Failed to build HTTP client")?;
        Ok(Self::new(fetcher))
    }
}

impl<S: PageSource> WatchlistOrchestrator<S> {
    pub fn new(fetcher: WatchlistFetcher<S>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &WatchlistFetcher<S> {
        &self.fetcher
    }

    /// Fetch the watchlists of `usernames`.
    ///
    /// Returns the watchlists that were found, in request order, and the
    /// users that do not exist. Any other failure ends the run.
    pub async fn fetch_watchlists(
        &self,
        usernames: &[String],
    ) -> Result<(Vec<Watchlist>, Vec<String>)> {
        let usernames = dedupe_usernames(usernames);
        if usernames.is_empty() {
            bail!("No usernames given");
        }

        let results = join_all(
            usernames
                .iter()
                .map(|username| self.fetcher.fetch_watchlist(username)),
        )
        .await;

        let mut watchlists = Vec::with_capacity(results.len());
        let mut skipped = Vec::new();

        for (username, result) in usernames.into_iter().zip(results) {
            match result {
                Ok(watchlist) => watchlists.push(watchlist),
                Err(e) if e.is_user_not_found() => {
                    warn!("Skipping {}: {}", username, e);
                    skipped.push(username);
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to fetch watchlist for {}", username));
                }
            }
        }

        if watchlists.is_empty() {
            bail!(
                "None of the requested users could be found: {}",
                skipped.join(", ")
            );
        }

        Ok((watchlists, skipped))
    }

    /// Intersect the watchlists of every user that exists
    pub async fn common_watchlist(&self, usernames: &[String]) -> Result<CommonOutcome> {
        let start = Instant::now();
        let (watchlists, skipped_users) = self.fetch_watchlists(usernames).await?;

        let common = intersect_watchlists(&watchlists).context("Failed to intersect watchlists")?;
        info!(
            "{} films in common across {} users ({} skipped) in {:.2?}",
            common.len(),
            watchlists.len(),
            skipped_users.len(),
            start.elapsed()
        );

        Ok(CommonOutcome {
            common,
            skipped_users,
        })
    }

    /// Fill in rating, runtime, director and genres from each film's page.
    ///
    /// Returns the slugs whose page was not found; those films keep the
    /// partial data from the watchlist.
    pub async fn enrich(&self, common: &mut CommonWatchlist) -> Result<Vec<FilmSlug>> {
        let start = Instant::now();
        let slugs: Vec<FilmSlug> = common.slugs().map(String::from).collect();

        let mut details = Vec::with_capacity(slugs.len());
        let mut missing = Vec::new();

        for (slug, result) in self.fetcher.fetch_films(&slugs).await {
            match result {
                Ok(Some(movie)) => details.push(movie),
                Ok(None) => missing.push(slug),
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to fetch film page for {}", slug));
                }
            }
        }

        let updated = common.apply_details(details);
        if !missing.is_empty() {
            warn!("No film page for {} films: {}", missing.len(), missing.join(", "));
        }
        info!(
            "Fetched details for {} of {} films in {:.2?}",
            updated,
            slugs.len(),
            start.elapsed()
        );

        Ok(missing)
    }

    /// Fetch, intersect, enrich and filter
    pub async fn run(&self, usernames: &[String], criteria: &FilterCriteria) -> Result<RunReport> {
        let start = Instant::now();

        let CommonOutcome {
            mut common,
            skipped_users,
        } = self.common_watchlist(usernames).await?;

        let missing_details = self.enrich(&mut common).await?;

        info!("Applying filters to {} films", common.len());
        let films = criteria.apply(common.films().to_vec())?;
        info!("Filtering complete, {} films remain", films.len());

        info!("Total run time: {:.2?}", start.elapsed());
        Ok(RunReport {
            common,
            films,
            skipped_users,
            missing_details,
        })
    }
}

/// Trimmed, non-empty usernames in first-seen order.
///
/// Profile paths ignore case, so names differing only in case count as
/// one user; the first spelling is kept.
fn dedupe_usernames(usernames: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(usernames.len());
    for username in usernames.iter().map(|u| u.trim()).filter(|u| !u.is_empty()) {
        if !unique.iter().any(|u| u.eq_ignore_ascii_case(username)) {
            unique.push(username.to_string());
        }
    }
    unique
}
