//! Google Books HTTP Client

use reqwest::Client;

use super::types::{Volume, VolumesResponse};
use crate::error::{check_response, json_with_limit, ProviderError};
use crate::http::{url_encode, SHARED_CLIENT};
use crate::models::{MediaType, Provider, SearchResult};

/// Appended to every query; Google Books has no audiobook-only index.
const AUDIOBOOK_SUFFIX: &str = " audiobook";
const NO_DESCRIPTION: &str = "No description available.";

/// Google Books volume-search client (reuses the shared connection pool).
pub struct GoogleBooksClient {
    base_url: String,
    client: Client,
}

impl GoogleBooksClient {
    /// Public Google Books API host.
    pub const DEFAULT_BASE_URL: &'static str = "https://www.googleapis.com";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: SHARED_CLIENT.clone(),
        }
    }

    /// Search volumes with the audiobook suffix applied.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let url = format!(
            "{}/books/v1/volumes?q={}",
            self.base_url,
            url_encode(&format!("{query}{AUDIOBOOK_SUFFIX}")),
        );

        let response = self.client.get(&url).send().await?;
        let response = check_response(response)?;
        let body: VolumesResponse = json_with_limit(response).await?;

        Ok(body.items.into_iter().map(normalize).collect())
    }
}

/// Map one volume onto the normalized search model. Description and
/// thumbnail live in the nested volume info and get placeholders when
/// absent.
fn normalize(volume: Volume) -> SearchResult {
    let info = volume.volume_info;

    SearchResult {
        id: volume.id,
        title: info.title.unwrap_or_default(),
        overview: info
            .description
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        year: info
            .published_date
            .unwrap_or_default()
            .chars()
            .take(4)
            .collect(),
        poster_url: info
            .image_links
            .and_then(|links| links.thumbnail)
            .unwrap_or_default(),
        provider: Provider::Googlebooks,
        media_type: MediaType::Audiobooks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::googlebooks::types::{ImageLinks, VolumeInfo};

    #[test]
    fn test_normalize_full_volume() {
        let volume = Volume {
            id: "zyTCAlFPjgYC".to_string(),
            volume_info: VolumeInfo {
                title: Some("The Google Story".to_string()),
                description: Some("An account.".to_string()),
                published_date: Some("2005-11-15".to_string()),
                image_links: Some(ImageLinks {
                    thumbnail: Some("http://books.google.com/thumb.jpg".to_string()),
                }),
            },
        };

        let result = normalize(volume);
        assert_eq!(result.id, "zyTCAlFPjgYC");
        assert_eq!(result.title, "The Google Story");
        assert_eq!(result.overview, "An account.");
        assert_eq!(result.year, "2005");
        assert_eq!(result.poster_url, "http://books.google.com/thumb.jpg");
        assert_eq!(result.media_type, MediaType::Audiobooks);
        assert_eq!(result.provider, Provider::Googlebooks);
    }

    #[test]
    fn test_normalize_placeholders() {
        let volume = Volume {
            id: "x".to_string(),
            volume_info: VolumeInfo::default(),
        };

        let result = normalize(volume);
        assert_eq!(result.overview, "No description available.");
        assert_eq!(result.poster_url, "");
        assert_eq!(result.year, "");
    }
}
