//! Request dispatch domain types

use serde::{Deserialize, Serialize};

use fetcharr_targets::TargetError;

/// One incoming request submission. The UI posts back the search result
/// it rendered, so the id arrives exactly as a provider produced it;
/// extra fields (overview, poster) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Raw media type string; unknown values are a validation error.
    pub media_type: String,
}

/// The acquisition system a request was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Overseerr,
    Radarr,
    Sonarr,
    Lazylibrarian,
    Listenarr,
}

/// Why a dispatch failed, independent of which target it was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request itself was malformed (unknown type, missing id).
    Validation,
    /// The target never answered (DNS, refused connection, timeout).
    UpstreamUnreachable,
    /// The target answered with a status outside its success set.
    UpstreamRejected,
    /// The target has no URL or API key configured.
    NotConfigured,
    /// Profile or folder auto-resolution came up empty.
    ConfigurationUnresolvable,
}

impl From<&TargetError> for ErrorKind {
    fn from(err: &TargetError) -> Self {
        match err {
            TargetError::NotConfigured { .. } => Self::NotConfigured,
            TargetError::Unreachable(_) => Self::UpstreamUnreachable,
            // An unparsable success body still means the upstream
            // answered with something we cannot act on.
            TargetError::Rejected { .. } | TargetError::Parse(_) => Self::UpstreamRejected,
            TargetError::Unresolvable { .. } => Self::ConfigurationUnresolvable,
        }
    }
}

/// Uniform result of one dispatch attempt, serialized to the UI as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl DispatchOutcome {
    #[must_use]
    pub fn ok(target: Target) -> Self {
        Self {
            ok: true,
            target: Some(target),
            error_kind: None,
            details: None,
        }
    }

    #[must_use]
    pub fn failed(target: Target, err: &TargetError) -> Self {
        Self {
            ok: false,
            target: Some(target),
            error_kind: Some(ErrorKind::from(err)),
            details: Some(err.to_string()),
        }
    }

    /// Failure before any target was chosen.
    #[must_use]
    pub fn validation(details: impl Into<String>) -> Self {
        Self {
            ok: false,
            target: None,
            error_kind: Some(ErrorKind::Validation),
            details: Some(details.into()),
        }
    }
}
