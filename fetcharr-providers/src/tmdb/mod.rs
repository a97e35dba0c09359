//! TMDB Provider Client
//!
//! Pure HTTP client for the TMDB title-search API, covering both the
//! movie and TV indexes.
//!
//! # Example
//!
//! ```no_run
//! use fetcharr_providers::tmdb::{TmdbClient, TmdbKind};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TmdbClient::new(TmdbClient::DEFAULT_BASE_URL, "api-key");
//! let results = client.search("the matrix", TmdbKind::Movie).await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod types;

pub use client::{TmdbClient, TmdbKind};
