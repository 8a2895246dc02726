//! Optional filter on release year.
//!
//! Keeps films released inside an inclusive year range. Either end of
//! the range may be open.

use crate::traits::Filter;
use anyhow::Result;
use watchlist_core::CommonFilm;

/// Filters films by release year.
///
/// ## Algorithm
/// 1. With neither bound set, keep all films
/// 2. Films without a known year are kept
/// 3. Otherwise keep `from <= year <= to`
pub struct ReleaseYearFilter {
    from: Option<u16>,
    to: Option<u16>,
}

impl ReleaseYearFilter {
    /// Create a new ReleaseYearFilter.
    ///
    /// # Arguments
    /// * `from` - Earliest release year, inclusive
    /// * `to` - Latest release year, inclusive
    pub fn new(from: Option<u16>, to: Option<u16>) -> Self {
        Self { from, to }
    }
}

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn apply(&self, films: Vec<CommonFilm>) -> Result<Vec<CommonFilm>> {
        if self.from.is_none() && self.to.is_none() {
            return Ok(films);
        }
        let lower = self.from.unwrap_or(u16::MIN);
        let upper = self.to.unwrap_or(u16::MAX);

        let filtered = films
            .into_iter()
            .filter(|film| match film.movie.year {
                Some(year) => year >= lower && year <= upper,
                None => true,
            })
            .collect();
        Ok(filtered)
    }
}
