//! Open Library HTTP API Types

use serde::Deserialize;

/// Response from `/search.json`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<Doc>,
}

/// One work document. `key` is of the form `/works/OL45883W`.
#[derive(Debug, Deserialize)]
pub struct Doc {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Vec<String>,
    #[serde(default)]
    pub first_publish_year: Option<i64>,
    #[serde(default)]
    pub cover_i: Option<i64>,
}
