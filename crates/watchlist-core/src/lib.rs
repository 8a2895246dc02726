//! # Watchlist Core
//!
//! Domain types shared by every crate in the workspace, plus the
//! operations that work on watchlists once they are in memory.
//!
//! ## Main Components
//!
//! - **types**: `Movie`, `Watchlist`, `WatchlistEntry`, `CommonWatchlist`
//! - **aggregate**: intersection of several users' watchlists
//! - **export**: CSV output of a common watchlist
//! - **error**: error types
//!
//! ## Example Usage
//!
//! ```ignore
//! use watchlist_core::{intersect_watchlists, Movie, Watchlist};
//!
//! let alice = Watchlist::with_films("alice", vec![Movie::partial("heat-1995", "Heat", Some(1995))]);
//! let bob = Watchlist::with_films("bob", vec![Movie::partial("heat-1995", "Heat", Some(1995))]);
//!
//! let common = intersect_watchlists(&[alice, bob])?;
//! assert_eq!(common.len(), 1);
//! ```

// Public modules
pub mod aggregate;
pub mod error;
pub mod export;
pub mod types;

// Re-export commonly used types for convenience
pub use aggregate::intersect_watchlists;
pub use error::{AggregateError, ExportError, Result};
pub use export::{write_csv, write_csv_file};
pub use types::{CommonFilm, CommonWatchlist, FilmSlug, Movie, Watchlist, WatchlistEntry};
