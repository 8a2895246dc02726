//! Error types for the watchlist-core crate.
//!
//! Scraping errors live in the `letterboxd` crate; the errors here only
//! cover what can go wrong once watchlists are in memory.

use thiserror::Error;

/// Errors that can occur while combining watchlists
#[derive(Error, Debug)]
pub enum AggregateError {
    /// Intersection needs at least one user's watchlist
    #[error("Cannot intersect an empty set of watchlists")]
    NoWatchlists,
}

/// Errors that can occur while exporting a common watchlist
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while creating or writing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer rejected a record
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, AggregateError>;
