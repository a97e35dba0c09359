//! Overseerr Target Client
//!
//! Request-approval gateway for movies and TV. When configured it takes
//! precedence over the direct Radarr/Sonarr managers.

mod client;

pub use client::{OverseerrClient, OverseerrMediaType, OverseerrSettings};
