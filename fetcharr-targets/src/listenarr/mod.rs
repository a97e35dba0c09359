//! Listenarr Target Client
//!
//! Audiobook manager. Accepts 200/201/202 as success; the backend signals
//! "accepted for processing" as 202.

mod client;

pub use client::{ListenarrClient, ListenarrSettings};
