//! Unified search aggregation

use tracing::warn;

use fetcharr_providers::models::{MediaType, SearchResult};
use fetcharr_providers::{GoogleBooksClient, OpenLibraryClient, TmdbClient, TmdbKind};

use crate::config::Config;

/// Queries shorter than this (after trimming) return nothing.
const MIN_QUERY_LEN: usize = 2;

/// Fans a search query out to the catalog provider responsible for the
/// requested media type. Provider failures never surface to the caller;
/// a broken catalog degrades into an empty result list.
pub struct SearchService {
    tmdb: TmdbClient,
    openlibrary: OpenLibraryClient,
    googlebooks: GoogleBooksClient,
}

impl SearchService {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            tmdb: TmdbClient::new(
                config.tmdb.base_url.clone(),
                config.tmdb.api_key.clone().unwrap_or_default(),
            ),
            openlibrary: OpenLibraryClient::new(config.openlibrary.base_url.clone()),
            googlebooks: GoogleBooksClient::new(config.googlebooks.base_url.clone()),
        }
    }

    /// Search the catalog matching `media_type`. Unknown media types and
    /// too-short queries produce an empty list without any network call.
    pub async fn search(&self, media_type: &str, query: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let Some(media_type) = MediaType::parse(media_type) else {
            return Vec::new();
        };

        let result = match media_type {
            MediaType::Movies => self.tmdb.search(query, TmdbKind::Movie).await,
            MediaType::Tv => self.tmdb.search(query, TmdbKind::Tv).await,
            MediaType::Books => self.openlibrary.search(query).await,
            MediaType::Audiobooks => self.googlebooks.search(query).await,
        };

        match result {
            Ok(results) => results,
            Err(e) => {
                warn!(
                    media_type = media_type.as_str(),
                    error = %e,
                    "search provider failed, returning empty results"
                );
                Vec::new()
            }
        }
    }
}
