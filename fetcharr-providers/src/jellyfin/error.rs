//! Jellyfin Identity Client Error Types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JellyfinError {
    /// Any status-bearing non-200 reply. Carries no upstream detail so
    /// "wrong password" and "server error" read identically to a login
    /// caller; only transport-level failures are reported separately.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("Jellyfin unreachable: {0}")]
    Unreachable(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
