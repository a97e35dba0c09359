//! Sonarr Target Client
//!
//! Direct show manager. Quality profile, language profile, and root
//! folder are resolved at dispatch time from Sonarr's own listing
//! endpoints when no static override is configured.

mod client;
pub mod types;

pub use client::{SonarrClient, SonarrSettings};
