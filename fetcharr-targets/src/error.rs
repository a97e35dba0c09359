//! Shared acquisition target error types
//!
//! One error enum covers all five target clients; the dispatch resolver
//! maps these variants onto the outward-facing error kinds.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TargetError {
    /// Base URL or API key missing; raised before any network call.
    #[error("{target} is not configured")]
    NotConfigured { target: &'static str },

    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// Non-success status; carries the upstream's raw body as detail.
    #[error("upstream rejected the request (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// Auto-resolution found no candidates for the named fields.
    /// Submission must not partially proceed when this is raised.
    #[error("could not resolve required configuration: {}", fields.join(", "))]
    Unresolvable { fields: Vec<&'static str> },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for TargetError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unreachable(err.to_string())
    }
}

impl From<serde_json::Error> for TargetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_names_target() {
        let err = TargetError::NotConfigured { target: "radarr" };
        assert_eq!(err.to_string(), "radarr is not configured");
    }

    #[test]
    fn test_unresolvable_names_every_field() {
        let err = TargetError::Unresolvable {
            fields: vec!["qualityProfileId", "rootFolderPath"],
        };
        assert_eq!(
            err.to_string(),
            "could not resolve required configuration: qualityProfileId, rootFolderPath"
        );
    }

    #[test]
    fn test_rejected_carries_body() {
        let err = TargetError::Rejected {
            status: 409,
            body: "already exists".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("409"));
        assert!(msg.contains("already exists"));
    }
}
