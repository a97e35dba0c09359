//! TMDB HTTP Client

use reqwest::Client;

use super::types::{SearchEntry, SearchResponse};
use crate::error::{check_response, json_with_limit, ProviderError};
use crate::http::{url_encode, SHARED_CLIENT};
use crate::models::{MediaType, Provider, SearchResult};

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
const MAX_RESULTS: usize = 20;

/// Which TMDB title index to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TmdbKind {
    Movie,
    Tv,
}

impl TmdbKind {
    const fn path(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    const fn media_type(self) -> MediaType {
        match self {
            Self::Movie => MediaType::Movies,
            Self::Tv => MediaType::Tv,
        }
    }
}

/// TMDB title-search client (reuses the shared connection pool).
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl TmdbClient {
    /// Public TMDB API host.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.themoviedb.org";

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: SHARED_CLIENT.clone(),
        }
    }

    /// Search the movie or TV title index and normalize the hits.
    ///
    /// The result list is truncated to the first 20 entries.
    pub async fn search(
        &self,
        query: &str,
        kind: TmdbKind,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let url = format!(
            "{}/3/search/{}?api_key={}&query={}",
            self.base_url,
            kind.path(),
            url_encode(&self.api_key),
            url_encode(query),
        );

        let response = self.client.get(&url).send().await?;
        let response = check_response(response)?;
        let body: SearchResponse = json_with_limit(response).await?;

        Ok(body
            .results
            .into_iter()
            .take(MAX_RESULTS)
            .map(|entry| normalize(entry, kind))
            .collect())
    }
}

/// Map one raw TMDB hit onto the normalized search model.
fn normalize(entry: SearchEntry, kind: TmdbKind) -> SearchResult {
    // Movie results use `release_date`, TV results `first_air_date`.
    let date = entry
        .release_date
        .or(entry.first_air_date)
        .unwrap_or_default();

    SearchResult {
        id: entry.id.to_string(),
        title: entry.title.or(entry.name).unwrap_or_default(),
        overview: entry.overview.unwrap_or_default(),
        year: date.chars().take(4).collect(),
        poster_url: entry
            .poster_path
            .map(|path| format!("{IMAGE_BASE}{path}"))
            .unwrap_or_default(),
        provider: Provider::Tmdb,
        media_type: kind.media_type(),
    }
}
