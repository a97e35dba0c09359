//! Jellyfin HTTP Client

use reqwest::Client;
use serde_json::json;

use super::error::JellyfinError;
use super::types::{AuthResponse, Session};
use crate::http::SHARED_CLIENT;

const AUTH_HEADER: &str = "X-Emby-Authorization";
const AUTH_HEADER_VALUE: &str =
    "MediaBrowser Client=\"Fetcharr\", Device=\"Fetcharr\", DeviceId=\"fetcharr\", Version=\"0.1.0\"";

/// Jellyfin identity client (reuses the shared connection pool).
pub struct JellyfinClient {
    base_url: String,
    client: Client,
}

impl JellyfinClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: SHARED_CLIENT.clone(),
        }
    }

    /// Exchange username/password for an access token.
    ///
    /// Every status-bearing non-200 collapses into `InvalidCredentials`
    /// regardless of the body; transport-level failures (DNS, refused
    /// connection, timeout) surface as the distinct `Unreachable`.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, JellyfinError> {
        let url = format!("{}/Users/AuthenticateByName", self.base_url);
        let body = json!({
            "Username": username,
            "Pw": password,
        });

        let response = self
            .client
            .post(&url)
            .header(AUTH_HEADER, AUTH_HEADER_VALUE)
            .json(&body)
            .send()
            .await
            .map_err(|e| JellyfinError::Unreachable(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(JellyfinError::InvalidCredentials);
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| JellyfinError::Parse(e.to_string()))?;

        Ok(Session {
            access_token: auth.access_token,
            user_id: auth.user.id,
            user_name: auth.user.name,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
