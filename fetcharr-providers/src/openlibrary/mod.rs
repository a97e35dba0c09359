//! Open Library Provider Client
//!
//! Pure HTTP client for the Open Library full-text book search API.

mod client;
pub mod types;

pub use client::OpenLibraryClient;
