//! Filter on the site-wide average rating.

use crate::traits::Filter;
use anyhow::Result;
use watchlist_core::CommonFilm;

/// Keeps films whose average rating is at least `min_rating`.
///
/// ## Unknown ratings
/// A film without an average rating (too few ratings, or details never
/// fetched) only passes when the threshold is `0.0` or lower, so a zero
/// threshold never removes anything.
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum average rating on the 0-5 scale
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }

    pub fn min_rating(&self) -> f32 {
        self.min_rating
    }

    fn keeps(&self, film: &CommonFilm) -> bool {
        match film.movie.average_rating {
            Some(rating) => rating >= self.min_rating,
            None => self.min_rating <= 0.0,
        }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, films: Vec<CommonFilm>) -> Result<Vec<CommonFilm>> {
        Ok(films.into_iter().filter(|film| self.keeps(film)).collect())
    }
}
