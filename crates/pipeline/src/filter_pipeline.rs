//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use tracing;
use watchlist_core::CommonFilm;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinimumRatingFilter::new(3.5))
///     .add_filter(MaximumDurationFilter::new(Some(120)));
///
/// let filtered = pipeline.apply(common.into_films())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the films.
    ///
    /// Each filter sees the output of the previous one; the first error
    /// stops the pipeline.
    pub fn apply(&self, films: Vec<CommonFilm>) -> Result<Vec<CommonFilm>> {
        let mut current = films;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{MaximumDurationFilter, MinimumRatingFilter};
    use watchlist_core::Movie;

    fn film(slug: &str, rating: f32, minutes: u32) -> CommonFilm {
        CommonFilm {
            movie: Movie::partial(slug, slug, None)
                .with_rating(rating)
                .with_duration(minutes),
            users: vec!["a".to_string()],
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let films = vec![film("x", 4.0, 90), film("y", 2.0, 200)];

        let filtered = pipeline.apply(films.clone()).unwrap();
        assert_eq!(filtered, films);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(MinimumRatingFilter::new(3.0));

        let films = vec![film("x", 4.0, 90), film("y", 2.0, 200)];

        let filtered = pipeline.apply(films).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie.slug, "x");
    }

    #[test]
    fn test_filters_chain() {
        let pipeline = FilterPipeline::new()
            .add_filter(MinimumRatingFilter::new(3.0))
            .add_filter(MaximumDurationFilter::new(Some(120)));
        assert_eq!(pipeline.len(), 2);

        let films = vec![film("x", 4.0, 90), film("y", 4.0, 200), film("z", 2.0, 80)];

        let filtered = pipeline.apply(films).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie.slug, "x");
    }
}
