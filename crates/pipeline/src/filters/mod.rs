//! Filter implementations for the common watchlist.
//!
//! Each filter looks at one attribute of a film. Compose them with a
//! `FilterPipeline`, or let `FilterCriteria` build the pipeline.

pub mod genre;
pub mod maximum_duration;
pub mod minimum_rating;
pub mod release_year;

// Re-export for convenience
pub use genre::GenreFilter;
pub use maximum_duration::MaximumDurationFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use release_year::ReleaseYearFilter;
