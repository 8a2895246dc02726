//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to common-watchlist films.

use anyhow::Result;
use watchlist_core::CommonFilm;

/// Core trait for filtering films.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters take ownership of the Vec<CommonFilm> and return a filtered Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of films.
    ///
    /// # Arguments
    /// * `films` - The films to filter (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<CommonFilm>)` - The films that passed, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, films: Vec<CommonFilm>) -> Result<Vec<CommonFilm>>;
}
