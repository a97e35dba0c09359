// Fetcharr core
//
// Configuration, logging, domain models and the two services that make
// up the broker:
// - `service::SearchService`: fans a query out to the catalog provider
//   for the requested media type and degrades provider failures into
//   empty result lists.
// - `service::DispatchService`: routes an approved request to the
//   matching acquisition target and folds the outcome into a uniform
//   `DispatchOutcome`.

pub mod config;
pub mod logging;
pub mod models;
pub mod service;

pub use config::Config;
pub use models::{DispatchOutcome, ErrorKind, RequestItem, Target};
pub use service::{DispatchService, SearchService};

// Search domain types live in the providers crate; re-export them so
// the HTTP layer only depends on core.
pub use fetcharr_providers::models::{MediaType, Provider, SearchResult};
