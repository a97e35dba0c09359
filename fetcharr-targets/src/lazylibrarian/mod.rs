//! LazyLibrarian Target Client
//!
//! Book manager driven through a command-style GET API. Unlike the other
//! targets, only HTTP 200 counts as success; the command endpoint has no
//! creation-status semantics.

mod client;

pub use client::{LazyLibrarianClient, LazyLibrarianSettings};
