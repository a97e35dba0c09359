//! Search client integration tests against a fake upstream.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fetcharr_providers::models::{MediaType, Provider};
use fetcharr_providers::{GoogleBooksClient, OpenLibraryClient, ProviderError, TmdbClient, TmdbKind};

#[tokio::test]
async fn tmdb_movie_search_normalizes_and_truncates() {
    let server = MockServer::start().await;

    // 25 hits; the client must keep only the first 20.
    let results: Vec<_> = (0..25)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Movie {i}"),
                "overview": "An overview.",
                "release_date": "1999-03-30",
                "poster_path": "/p.jpg",
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "the matrix"))
        .and(query_param("api_key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
        .mount(&server)
        .await;

    let client = TmdbClient::new(server.uri(), "secret");
    let hits = client
        .search("the matrix", TmdbKind::Movie)
        .await
        .expect("search should succeed");

    assert_eq!(hits.len(), 20);
    assert_eq!(hits[0].id, "0");
    assert_eq!(hits[0].year, "1999");
    assert_eq!(hits[0].poster_url, "https://image.tmdb.org/t/p/w500/p.jpg");
    assert_eq!(hits[0].provider, Provider::Tmdb);
    assert_eq!(hits[0].media_type, MediaType::Movies);
}

#[tokio::test]
async fn tmdb_tv_search_uses_tv_index_and_name_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/3/search/tv"))
        .and(query_param("query", "thrones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": 1399,
                "name": "Game of Thrones",
                "first_air_date": "2011-04-17",
            }]
        })))
        .mount(&server)
        .await;

    let client = TmdbClient::new(server.uri(), "secret");
    let hits = client.search("thrones", TmdbKind::Tv).await.unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Game of Thrones");
    assert_eq!(hits[0].year, "2011");
    assert_eq!(hits[0].media_type, MediaType::Tv);
}

#[tokio::test]
async fn tmdb_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let client = TmdbClient::new(server.uri(), "bad");
    let err = client.search("anything", TmdbKind::Movie).await.unwrap_err();
    assert!(matches!(err, ProviderError::Http { .. }));
}

#[tokio::test]
async fn openlibrary_search_normalizes_docs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "good omens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{
                "key": "/works/OL453936W",
                "title": "Good Omens",
                "author_name": ["Terry Pratchett", "Neil Gaiman", "Extra Name"],
                "first_publish_year": 1990,
                "cover_i": 1234,
            }, {
                "key": "/works/OL2W",
                "title": "Untitled",
            }]
        })))
        .mount(&server)
        .await;

    let client = OpenLibraryClient::new(server.uri());
    let hits = client.search("good omens").await.unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id, "OL453936W");
    assert_eq!(hits[0].overview, "Terry Pratchett, Neil Gaiman");
    assert_eq!(
        hits[0].poster_url,
        "https://covers.openlibrary.org/b/id/1234-M.jpg"
    );
    assert_eq!(hits[1].overview, "Unknown author");
    assert_eq!(hits[1].poster_url, "");
    assert_eq!(hits[1].media_type, MediaType::Books);
}

#[tokio::test]
async fn googlebooks_appends_audiobook_to_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .and(query_param("q", "dune audiobook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "abc123",
                "volumeInfo": {
                    "title": "Dune",
                    "publishedDate": "1965-08-01",
                    "imageLinks": { "thumbnail": "http://t/img.jpg" },
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GoogleBooksClient::new(server.uri());
    let hits = client.search("dune").await.unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "abc123");
    assert_eq!(hits[0].overview, "No description available.");
    assert_eq!(hits[0].year, "1965");
    assert_eq!(hits[0].media_type, MediaType::Audiobooks);
}

#[tokio::test]
async fn malformed_payload_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = OpenLibraryClient::new(server.uri());
    let err = client.search("whatever").await.unwrap_err();
    assert!(matches!(err, ProviderError::Parse(_)));
}
