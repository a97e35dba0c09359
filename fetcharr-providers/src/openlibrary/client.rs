//! Open Library HTTP Client

use reqwest::Client;

use super::types::{Doc, SearchResponse};
use crate::error::{check_response, json_with_limit, ProviderError};
use crate::http::{url_encode, SHARED_CLIENT};
use crate::models::{MediaType, Provider, SearchResult};

const COVER_BASE: &str = "https://covers.openlibrary.org/b/id";
const WORKS_PREFIX: &str = "/works/";
const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Open Library book-search client (reuses the shared connection pool).
pub struct OpenLibraryClient {
    base_url: String,
    client: Client,
}

impl OpenLibraryClient {
    /// Public Open Library host.
    pub const DEFAULT_BASE_URL: &'static str = "https://openlibrary.org";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: SHARED_CLIENT.clone(),
        }
    }

    /// Full-text search over works, normalized into search results.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let url = format!("{}/search.json?q={}", self.base_url, url_encode(query));

        let response = self.client.get(&url).send().await?;
        let response = check_response(response)?;
        let body: SearchResponse = json_with_limit(response).await?;

        Ok(body.docs.into_iter().map(normalize).collect())
    }
}

/// Map one work document onto the normalized search model.
///
/// The work key keeps its `/works/` prefix stripped so the id stays a
/// bare identifier the book manager can consume; the overview is the
/// first two author names.
fn normalize(doc: Doc) -> SearchResult {
    let id = doc
        .key
        .strip_prefix(WORKS_PREFIX)
        .unwrap_or(&doc.key)
        .to_string();

    let overview = if doc.author_name.is_empty() {
        UNKNOWN_AUTHOR.to_string()
    } else {
        doc.author_name
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    SearchResult {
        id,
        title: doc.title.unwrap_or_default(),
        overview,
        year: doc
            .first_publish_year
            .map(|year| year.to_string())
            .unwrap_or_default(),
        poster_url: doc
            .cover_i
            .map(|cover| format!("{COVER_BASE}/{cover}-M.jpg"))
            .unwrap_or_default(),
        provider: Provider::Openlibrary,
        media_type: MediaType::Books,
    }
}
