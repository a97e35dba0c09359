//! Jellyfin Identity Client
//!
//! Pure HTTP client for the Jellyfin authenticate-by-name endpoint. The
//! broker performs no session management; it exchanges credentials for an
//! access token and hands that token back to the caller.

mod client;
pub mod error;
pub mod types;

pub use client::JellyfinClient;
pub use error::JellyfinError;
pub use types::Session;
