//! Filtering and ordering of a common watchlist.
//!
//! This crate provides:
//! - Filter trait and implementations (rating, runtime, release year, genre)
//! - FilterPipeline for composing filters
//! - FilterCriteria, which builds a pipeline from plain thresholds
//! - sort_films for display ordering
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, filter_common_watchlist};
//! use pipeline::filters::*;
//!
//! // The common case
//! let films = filter_common_watchlist(common, 3.5, Some(120))?;
//!
//! // Or build the pipeline by hand
//! let pipeline = FilterPipeline::new()
//!     .add_filter(MinimumRatingFilter::new(3.5))
//!     .add_filter(GenreFilter::new(["Horror"]));
//! let films = pipeline.apply(films)?;
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod sort;
pub mod traits;

// Re-export main types
pub use criteria::{filter_common_watchlist, FilterCriteria};
pub use filter_pipeline::FilterPipeline;
pub use sort::{sort_films, SortKey};
pub use traits::Filter;
