//! Broker services
//!
//! `SearchService` aggregates catalog lookups, `DispatchService` routes
//! approved requests to acquisition targets.

mod dispatch;
mod search;

pub use dispatch::DispatchService;
pub use search::SearchService;
