// Fetcharr provider clients
//
// Pure HTTP client implementations for the external search and identity
// APIs the broker queries:
// - tmdb: movie/TV title search
// - openlibrary: book full-text search
// - googlebooks: audiobook search (volume API with query augmentation)
// - jellyfin: authenticate-by-name identity exchange
//
// Each search client normalizes its upstream payload into
// `models::SearchResult`. These clients return `Result`; the decision to
// degrade search errors into empty result lists belongs to the aggregator
// in fetcharr-core, not to the clients themselves.

// Shared error types and HTTP plumbing
pub mod error;
pub mod http;

// Normalized search domain types
pub mod models;

// HTTP clients
pub mod googlebooks;
pub mod jellyfin;
pub mod openlibrary;
pub mod tmdb;

// Re-export client types for convenience
pub use error::ProviderError;
pub use googlebooks::GoogleBooksClient;
pub use jellyfin::JellyfinClient;
pub use jellyfin::error::JellyfinError;
pub use openlibrary::OpenLibraryClient;
pub use tmdb::{TmdbClient, TmdbKind};
