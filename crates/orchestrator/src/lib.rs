//! Runs the whole common-watchlist flow: fetch every user's watchlist,
//! intersect, fetch film details, filter.

pub mod orchestrator;

pub use orchestrator::{CommonOutcome, RunReport, WatchlistOrchestrator};
