//! Intersection of watchlists.
//!
//! Membership is decided by slug only. The first watchlist drives the
//! output order; every other watchlist is only probed through its slug
//! index, so the cost is O(n * users) lookups for a first list of n films.

use crate::error::{AggregateError, Result};
use crate::types::{CommonFilm, CommonWatchlist, Watchlist};
use rayon::prelude::*;
use tracing::debug;

/// Intersect the given watchlists into a `CommonWatchlist`.
///
/// - One watchlist: returns that list unchanged
/// - Order: insertion order of the first watchlist
/// - Users: every supplied username, in the order given
///
/// Fails with `AggregateError::NoWatchlists` when `watchlists` is empty.
pub fn intersect_watchlists(watchlists: &[Watchlist]) -> Result<CommonWatchlist> {
    let (first, rest) = watchlists
        .split_first()
        .ok_or(AggregateError::NoWatchlists)?;

    let usernames: Vec<String> = watchlists.iter().map(|w| w.username.clone()).collect();

    // par_iter over a slice is indexed, so collect() keeps the original order
    let films: Vec<CommonFilm> = first
        .films()
        .par_iter()
        .filter(|movie| rest.iter().all(|other| other.contains(&movie.slug)))
        .map(|movie| CommonFilm {
            movie: movie.clone(),
            users: usernames.clone(),
        })
        .collect();

    debug!(
        "Intersected {} watchlists: {} films in first list, {} in common",
        watchlists.len(),
        first.len(),
        films.len()
    );

    Ok(CommonWatchlist::new(usernames, films))
}
