//! Radarr Target Client
//!
//! Direct movie manager. Quality profile and root folder are resolved at
//! dispatch time from Radarr's own listing endpoints when no static
//! override is configured.

mod client;
pub mod types;

pub use client::{RadarrClient, RadarrSettings};
