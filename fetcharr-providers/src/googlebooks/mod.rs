//! Google Books Provider Client
//!
//! Pure HTTP client for the Google Books volume-search API, used for
//! audiobook search. There is no native audiobook API; the client appends
//! a literal ` audiobook` to every query as a disambiguation heuristic.

mod client;
pub mod types;

pub use client::GoogleBooksClient;
