//! TMDB HTTP API Types
//!
//! Raw response shapes for the title-search endpoints. Normalization into
//! `SearchResult` happens in the client.

use serde::Deserialize;

/// Paged search response from `/3/search/movie` and `/3/search/tv`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchEntry>,
}

/// One raw search hit. Movie hits carry `title`/`release_date`, TV hits
/// carry `name`/`first_air_date`; all text fields may be absent.
#[derive(Debug, Deserialize)]
pub struct SearchEntry {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}
