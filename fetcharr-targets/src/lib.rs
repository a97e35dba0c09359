// Fetcharr acquisition target clients
//
// Pure HTTP client implementations for the downstream automation systems
// that fulfil a request:
// - overseerr: request-approval gateway (movies, tv)
// - radarr / sonarr: direct movie / show managers with profile and
//   root-folder auto-resolution
// - lazylibrarian: book manager (command-style GET API)
// - listenarr: audiobook manager (wanted-item API)
//
// Every client short-circuits with `TargetError::NotConfigured` when its
// base URL or API key is absent, before attempting any network call.
// Which client handles a given request is decided by the dispatch
// resolver in fetcharr-core.

// Shared error types and HTTP plumbing
pub mod error;
pub mod http;

// Shared resolution policy helpers
pub mod resolve;

// HTTP clients
pub mod lazylibrarian;
pub mod listenarr;
pub mod overseerr;
pub mod radarr;
pub mod sonarr;

// Re-export client and settings types for convenience
pub use error::TargetError;
pub use lazylibrarian::{LazyLibrarianClient, LazyLibrarianSettings};
pub use listenarr::{ListenarrClient, ListenarrSettings};
pub use overseerr::{OverseerrClient, OverseerrMediaType, OverseerrSettings};
pub use radarr::{RadarrClient, RadarrSettings};
pub use sonarr::{SonarrClient, SonarrSettings};
