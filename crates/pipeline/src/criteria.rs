//! Thresholds for narrowing a common watchlist.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, MaximumDurationFilter, MinimumRatingFilter, ReleaseYearFilter};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use watchlist_core::{CommonFilm, CommonWatchlist};

/// Every threshold the filters understand.
///
/// The default keeps every film: no rating floor, no runtime cap, no
/// year range, no genre restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_rating: f32,
    pub max_duration: Option<u32>,
    pub year_from: Option<u16>,
    pub year_to: Option<u16>,
    pub genres: Vec<String>,
}

impl FilterCriteria {
    pub fn new(min_rating: f32, max_duration: Option<u32>) -> Self {
        Self {
            min_rating,
            max_duration,
            ..Self::default()
        }
    }

    pub fn with_years(mut self, from: Option<u16>, to: Option<u16>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Build the pipeline for these criteria.
    ///
    /// Rating and duration always run; the year and genre filters are
    /// only added when they restrict something.
    pub fn to_pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new()
            .add_filter(MinimumRatingFilter::new(self.min_rating))
            .add_filter(MaximumDurationFilter::new(self.max_duration));

        if self.year_from.is_some() || self.year_to.is_some() {
            pipeline = pipeline.add_filter(ReleaseYearFilter::new(self.year_from, self.year_to));
        }
        if !self.genres.is_empty() {
            pipeline = pipeline.add_filter(GenreFilter::new(&self.genres));
        }
        pipeline
    }

    /// Run the pipeline over `films`
    pub fn apply(&self, films: Vec<CommonFilm>) -> Result<Vec<CommonFilm>> {
        self.to_pipeline()
            .apply(films)
            .context("Failed to filter common watchlist")
    }
}

/// Films of `common` rated at least `min_rating` and no longer than
/// `max_duration` minutes (`None` means no limit).
///
/// `filter_common_watchlist(common, 0.0, None)` returns every film.
pub fn filter_common_watchlist(
    common: CommonWatchlist,
    min_rating: f32,
    max_duration: Option<u32>,
) -> Result<Vec<CommonFilm>> {
    FilterCriteria::new(min_rating, max_duration).apply(common.into_films())
}
