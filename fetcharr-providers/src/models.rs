//! Normalized search domain types
//!
//! Every provider client maps its upstream payload into these types.
//! They are request-scoped value objects: produced fresh per query, never
//! persisted.

use serde::{Deserialize, Serialize};

/// The four media categories the broker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movies,
    Tv,
    Books,
    Audiobooks,
}

impl MediaType {
    /// Parse a client-supplied media type string.
    ///
    /// Unknown values are `None`; callers decide whether that means
    /// "empty results" (search) or a validation error (dispatch).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "movies" => Some(Self::Movies),
            "tv" => Some(Self::Tv),
            "books" => Some(Self::Books),
            "audiobooks" => Some(Self::Audiobooks),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movies => "movies",
            Self::Tv => "tv",
            Self::Books => "books",
            Self::Audiobooks => "audiobooks",
        }
    }
}

/// Which upstream catalog produced a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Tmdb,
    Openlibrary,
    Googlebooks,
}

/// One normalized search hit.
///
/// `id` is provider-scoped and opaque outside that provider; it must
/// round-trip unchanged into a later request submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub overview: String,
    /// Release year, 0-4 digits; empty when the upstream has no date.
    pub year: String,
    /// Full poster/cover URL, or empty when the upstream has none.
    pub poster_url: String,
    pub provider: Provider,
    pub media_type: MediaType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_parse() {
        assert_eq!(MediaType::parse("movies"), Some(MediaType::Movies));
        assert_eq!(MediaType::parse("tv"), Some(MediaType::Tv));
        assert_eq!(MediaType::parse("books"), Some(MediaType::Books));
        assert_eq!(MediaType::parse("audiobooks"), Some(MediaType::Audiobooks));
        assert_eq!(MediaType::parse("music"), None);
        assert_eq!(MediaType::parse(""), None);
        // Parsing is case-sensitive; the UI sends lowercase values.
        assert_eq!(MediaType::parse("Movies"), None);
    }

    #[test]
    fn test_media_type_round_trip() {
        for mt in [
            MediaType::Movies,
            MediaType::Tv,
            MediaType::Books,
            MediaType::Audiobooks,
        ] {
            assert_eq!(MediaType::parse(mt.as_str()), Some(mt));
        }
    }

    #[test]
    fn test_search_result_serializes_camel_case() {
        let result = SearchResult {
            id: "603".to_string(),
            title: "The Matrix".to_string(),
            overview: "A hacker learns the truth.".to_string(),
            year: "1999".to_string(),
            poster_url: String::new(),
            provider: Provider::Tmdb,
            media_type: MediaType::Movies,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["id"], "603");
        assert_eq!(json["posterUrl"], "");
        assert_eq!(json["mediaType"], "movies");
        assert_eq!(json["provider"], "tmdb");
    }
}
